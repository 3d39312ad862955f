use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Competition {
    League,
    ContinentalCup,
    DomesticCup,
    Friendly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Out,
    Doubtful,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceDuration {
    ShortTerm,
    MediumTerm,
    LongTerm,
    SeasonEnding,
}

/// Market-value bracket of a player. Which bracket a given transfer fee or
/// valuation falls into is decided upstream; the engine only ever sees the
/// tier. `Unknown` is the fallback when no valuation is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTier {
    Elite,
    High,
    Mid,
    Low,
    Minimal,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerTier {
    Elite,
    Established,
    Unproven,
    Interim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Permanent,
    Loan,
}

/// One finished match between two rated teams, as seen by the rating update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchObservation {
    pub home_rating: f64,
    pub away_rating: f64,
    pub home_goals: u32,
    pub away_goals: u32,
    pub competition: Competition,
    #[serde(default)]
    pub neutral_venue: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub home_rating: f64,
    pub away_rating: f64,
    // The away delta is always the exact negation of this.
    pub home_delta: f64,
    pub expected_home: f64,
    pub expected_away: f64,
}

/// How strongly a missing player weakens the side, in [0, 1]. Either the
/// feed supplies the value directly, or it is derived from minutes played
/// and market-value tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceImpact {
    Direct(f64),
    Derived {
        minutes_played: f64,
        value_tier: ValueTier,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAbsence {
    pub player_id: u32,
    pub impact: AbsenceImpact,
    pub status: AvailabilityStatus,
    pub position: Position,
    pub duration: AbsenceDuration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEvent {
    pub player_id: u32,
    pub impact: f64,
    pub direction: TransferDirection,
    pub kind: TransferKind,
    pub effective: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ManagerChange {
    pub tier: ManagerTier,
    pub changed_on: NaiveDate,
}

/// Everything known about one team on one day. Built by the ingestion side,
/// consumed once per rating computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub base_rating: f64,
    #[serde(default)]
    pub absences: Vec<PlayerAbsence>,
    #[serde(default)]
    pub transfers: Vec<TransferEvent>,
    #[serde(default)]
    pub manager_change: Option<ManagerChange>,
    pub rest_days: u32,
    pub matches_in_14_days: u32,
    pub as_of: NaiveDate,
}

/// Itemized result of one rating computation. Every component that went
/// into `total_raw` is kept so a consumer can audit where the number came
/// from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub base: f64,
    pub injury: f64,
    pub transfer: f64,
    pub manager: f64,
    pub fatigue: f64,
    pub total_raw: f64,
    pub display: f64,
}
