use serde::{Deserialize, Serialize};

use crate::error::{RatingError, Result};
use crate::types::{
    AbsenceDuration, AvailabilityStatus, Competition, ManagerTier, Position, TransferKind,
    ValueTier,
};

/// Full parameter set for the rating engine. Loaded once by the surrounding
/// application and treated as read-only for the process lifetime; the engine
/// itself never mutates it.
///
/// Every category enum has a named field per variant in its weight table, so
/// a parameter file that fails to cover a category fails to deserialize
/// instead of hitting a lookup miss mid-computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingParameters {
    pub elo: EloParams,
    pub injury: InjuryParams,
    pub transfer: TransferParams,
    pub manager: ManagerParams,
    pub fatigue: FatigueParams,
    pub display: DisplayParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloParams {
    pub k_base: f64,
    /// Rating points credited to the home side before computing expectancy.
    pub home_advantage: f64,
    pub competition_weights: CompetitionWeights,
    pub margin: MarginBonusParams,
}

impl Default for EloParams {
    fn default() -> Self {
        Self {
            k_base: 20.0,
            home_advantage: 60.0,
            competition_weights: CompetitionWeights::default(),
            margin: MarginBonusParams::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionWeights {
    pub league: f64,
    pub continental_cup: f64,
    pub domestic_cup: f64,
    pub friendly: f64,
}

impl CompetitionWeights {
    pub fn weight(&self, competition: Competition) -> f64 {
        match competition {
            Competition::League => self.league,
            Competition::ContinentalCup => self.continental_cup,
            Competition::DomesticCup => self.domestic_cup,
            Competition::Friendly => self.friendly,
        }
    }
}

impl Default for CompetitionWeights {
    fn default() -> Self {
        Self {
            league: 1.0,
            continental_cup: 1.2,
            domestic_cup: 0.9,
            friendly: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginBonusParams {
    pub enabled: bool,
    /// Goal differences beyond this magnitude are treated identically.
    pub cap_goals: u32,
    pub per_goal: f64,
}

impl Default for MarginBonusParams {
    fn default() -> Self {
        Self {
            enabled: true,
            cap_goals: 2,
            per_goal: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryParams {
    /// Rating points per unit of weighted absence impact.
    pub scale: f64,
    pub status_weights: StatusWeights,
    pub position_weights: PositionWeights,
    pub duration_weights: DurationWeights,
    pub tier_scores: ValueTierScores,
    pub derived: DerivedImpactParams,
}

impl Default for InjuryParams {
    fn default() -> Self {
        Self {
            scale: 18.0,
            status_weights: StatusWeights::default(),
            position_weights: PositionWeights::default(),
            duration_weights: DurationWeights::default(),
            tier_scores: ValueTierScores::default(),
            derived: DerivedImpactParams::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusWeights {
    pub out: f64,
    pub doubtful: f64,
    pub suspended: f64,
}

impl StatusWeights {
    pub fn weight(&self, status: AvailabilityStatus) -> f64 {
        match status {
            AvailabilityStatus::Out => self.out,
            AvailabilityStatus::Doubtful => self.doubtful,
            AvailabilityStatus::Suspended => self.suspended,
        }
    }
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            out: 1.0,
            doubtful: 0.45,
            suspended: 0.9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionWeights {
    pub goalkeeper: f64,
    pub defender: f64,
    pub midfielder: f64,
    pub attacker: f64,
}

impl PositionWeights {
    pub fn weight(&self, position: Position) -> f64 {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Attacker => self.attacker,
        }
    }
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self {
            goalkeeper: 1.1,
            defender: 0.95,
            midfielder: 1.0,
            attacker: 1.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationWeights {
    pub short_term: f64,
    pub medium_term: f64,
    pub long_term: f64,
    pub season_ending: f64,
}

impl DurationWeights {
    pub fn weight(&self, duration: AbsenceDuration) -> f64 {
        match duration {
            AbsenceDuration::ShortTerm => self.short_term,
            AbsenceDuration::MediumTerm => self.medium_term,
            AbsenceDuration::LongTerm => self.long_term,
            AbsenceDuration::SeasonEnding => self.season_ending,
        }
    }
}

impl Default for DurationWeights {
    fn default() -> Self {
        Self {
            short_term: 0.6,
            medium_term: 1.0,
            long_term: 1.25,
            season_ending: 1.5,
        }
    }
}

/// Impact score contributed by each market-value tier when an absence has no
/// directly reported impact. The bracket boundaries behind the tiers live in
/// the parameter source, not in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueTierScores {
    pub elite: f64,
    pub high: f64,
    pub mid: f64,
    pub low: f64,
    pub minimal: f64,
    pub unknown: f64,
}

impl ValueTierScores {
    pub fn score(&self, tier: ValueTier) -> f64 {
        match tier {
            ValueTier::Elite => self.elite,
            ValueTier::High => self.high,
            ValueTier::Mid => self.mid,
            ValueTier::Low => self.low,
            ValueTier::Minimal => self.minimal,
            ValueTier::Unknown => self.unknown,
        }
    }
}

impl Default for ValueTierScores {
    fn default() -> Self {
        Self {
            elite: 1.0,
            high: 0.8,
            mid: 0.6,
            low: 0.4,
            minimal: 0.25,
            unknown: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedImpactParams {
    /// Minutes at which a player counts as a full-time regular.
    pub minutes_full: f64,
    pub minutes_weight: f64,
    pub tier_weight: f64,
}

impl Default for DerivedImpactParams {
    fn default() -> Self {
        Self {
            minutes_full: 900.0,
            minutes_weight: 0.6,
            tier_weight: 0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferParams {
    /// Rating points per unit of fully ramped transfer impact.
    pub scale: f64,
    pub ramp_days: RampDays,
}

impl Default for TransferParams {
    fn default() -> Self {
        Self {
            scale: 12.0,
            ramp_days: RampDays::default(),
        }
    }
}

/// Days over which a transfer phases in linearly, per move kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampDays {
    pub permanent: f64,
    pub loan: f64,
}

impl RampDays {
    pub fn days(&self, kind: TransferKind) -> f64 {
        match kind {
            TransferKind::Permanent => self.permanent,
            TransferKind::Loan => self.loan,
        }
    }
}

impl Default for RampDays {
    fn default() -> Self {
        Self {
            permanent: 30.0,
            loan: 14.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerParams {
    /// Time constant of the exponential decay, in days.
    pub decay_days: f64,
    pub tier_deltas: ManagerTierDeltas,
}

impl Default for ManagerParams {
    fn default() -> Self {
        Self {
            decay_days: 45.0,
            tier_deltas: ManagerTierDeltas::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerTierDeltas {
    pub elite: f64,
    pub established: f64,
    pub unproven: f64,
    pub interim: f64,
}

impl ManagerTierDeltas {
    pub fn delta(&self, tier: ManagerTier) -> f64 {
        match tier {
            ManagerTier::Elite => self.elite,
            ManagerTier::Established => self.established,
            ManagerTier::Unproven => self.unproven,
            ManagerTier::Interim => self.interim,
        }
    }
}

impl Default for ManagerTierDeltas {
    fn default() -> Self {
        Self {
            elite: 20.0,
            established: 10.0,
            unproven: -4.0,
            interim: -8.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueParams {
    /// Penalty per rest day missing below the floor.
    pub rest_penalty: f64,
    /// Penalty per match played beyond the 14-day ceiling.
    pub congestion_penalty: f64,
    pub rest_days_floor: u32,
    pub matches_ceiling: u32,
}

impl Default for FatigueParams {
    fn default() -> Self {
        Self {
            rest_penalty: 2.0,
            congestion_penalty: 3.0,
            rest_days_floor: 4,
            matches_ceiling: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayParams {
    /// Raw rating mapped to the middle of the display interval.
    pub midpoint: f64,
    /// Width of the logistic transition, in raw rating points.
    pub scale: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            midpoint: 1850.0,
            scale: 120.0,
            min: 10.0,
            max: 1000.0,
        }
    }
}

impl RatingParameters {
    /// Numeric sanity check, meant to run right after the surrounding
    /// application deserializes a parameter file. Category coverage needs no
    /// check here: the weight tables carry one field per enum variant.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named_constants() {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if self.elo.k_base <= 0.0 {
            return Err(invalid(format!(
                "elo.k_base must be positive, got {}",
                self.elo.k_base
            )));
        }
        if self.injury.derived.minutes_full <= 0.0 {
            return Err(invalid(format!(
                "injury.derived.minutes_full must be positive, got {}",
                self.injury.derived.minutes_full
            )));
        }
        if self.transfer.ramp_days.permanent <= 0.0 || self.transfer.ramp_days.loan <= 0.0 {
            return Err(invalid(format!(
                "transfer.ramp_days must be positive, got permanent={} loan={}",
                self.transfer.ramp_days.permanent, self.transfer.ramp_days.loan
            )));
        }
        if self.manager.decay_days <= 0.0 {
            return Err(invalid(format!(
                "manager.decay_days must be positive, got {}",
                self.manager.decay_days
            )));
        }
        if self.display.scale <= 0.0 {
            return Err(invalid(format!(
                "display.scale must be positive, got {}",
                self.display.scale
            )));
        }
        if self.display.min >= self.display.max {
            return Err(invalid(format!(
                "display.min must be below display.max, got [{}, {}]",
                self.display.min, self.display.max
            )));
        }
        Ok(())
    }

    fn named_constants(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("elo.k_base", self.elo.k_base),
            ("elo.home_advantage", self.elo.home_advantage),
            ("elo.competition_weights.league", self.elo.competition_weights.league),
            (
                "elo.competition_weights.continental_cup",
                self.elo.competition_weights.continental_cup,
            ),
            (
                "elo.competition_weights.domestic_cup",
                self.elo.competition_weights.domestic_cup,
            ),
            ("elo.competition_weights.friendly", self.elo.competition_weights.friendly),
            ("elo.margin.per_goal", self.elo.margin.per_goal),
            ("injury.scale", self.injury.scale),
            ("injury.status_weights.out", self.injury.status_weights.out),
            ("injury.status_weights.doubtful", self.injury.status_weights.doubtful),
            ("injury.status_weights.suspended", self.injury.status_weights.suspended),
            ("injury.position_weights.goalkeeper", self.injury.position_weights.goalkeeper),
            ("injury.position_weights.defender", self.injury.position_weights.defender),
            ("injury.position_weights.midfielder", self.injury.position_weights.midfielder),
            ("injury.position_weights.attacker", self.injury.position_weights.attacker),
            ("injury.duration_weights.short_term", self.injury.duration_weights.short_term),
            ("injury.duration_weights.medium_term", self.injury.duration_weights.medium_term),
            ("injury.duration_weights.long_term", self.injury.duration_weights.long_term),
            (
                "injury.duration_weights.season_ending",
                self.injury.duration_weights.season_ending,
            ),
            ("injury.tier_scores.elite", self.injury.tier_scores.elite),
            ("injury.tier_scores.high", self.injury.tier_scores.high),
            ("injury.tier_scores.mid", self.injury.tier_scores.mid),
            ("injury.tier_scores.low", self.injury.tier_scores.low),
            ("injury.tier_scores.minimal", self.injury.tier_scores.minimal),
            ("injury.tier_scores.unknown", self.injury.tier_scores.unknown),
            ("injury.derived.minutes_full", self.injury.derived.minutes_full),
            ("injury.derived.minutes_weight", self.injury.derived.minutes_weight),
            ("injury.derived.tier_weight", self.injury.derived.tier_weight),
            ("transfer.scale", self.transfer.scale),
            ("transfer.ramp_days.permanent", self.transfer.ramp_days.permanent),
            ("transfer.ramp_days.loan", self.transfer.ramp_days.loan),
            ("manager.decay_days", self.manager.decay_days),
            ("manager.tier_deltas.elite", self.manager.tier_deltas.elite),
            ("manager.tier_deltas.established", self.manager.tier_deltas.established),
            ("manager.tier_deltas.unproven", self.manager.tier_deltas.unproven),
            ("manager.tier_deltas.interim", self.manager.tier_deltas.interim),
            ("fatigue.rest_penalty", self.fatigue.rest_penalty),
            ("fatigue.congestion_penalty", self.fatigue.congestion_penalty),
            ("display.midpoint", self.display.midpoint),
            ("display.scale", self.display.scale),
            ("display.min", self.display.min),
            ("display.max", self.display.max),
        ]
    }
}

fn invalid(message: String) -> anyhow::Error {
    RatingError::InvalidParameters { message }.into()
}
