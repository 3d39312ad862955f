use chrono::NaiveDate;
use tracing::warn;

use crate::params::RatingParameters;
use crate::types::{
    AbsenceImpact, ManagerChange, PlayerAbsence, TransferDirection, TransferEvent,
};

/// Rating penalty for the players currently unavailable. Each absence
/// contributes its impact scaled by status, position and expected duration;
/// an empty list is exactly neutral.
pub fn injury_adjustment(absences: &[PlayerAbsence], params: &RatingParameters) -> f64 {
    if absences.is_empty() {
        return 0.0;
    }
    let injury = &params.injury;
    let mut weighted = 0.0;
    for absence in absences {
        weighted += absence_impact(absence, params)
            * injury.status_weights.weight(absence.status)
            * injury.position_weights.weight(absence.position)
            * injury.duration_weights.weight(absence.duration);
    }
    -injury.scale * weighted
}

fn absence_impact(absence: &PlayerAbsence, params: &RatingParameters) -> f64 {
    match absence.impact {
        AbsenceImpact::Direct(value) => {
            if !(0.0..=1.0).contains(&value) {
                warn!(
                    player_id = absence.player_id,
                    value, "direct absence impact outside [0, 1], clamping"
                );
            }
            value.clamp(0.0, 1.0)
        }
        AbsenceImpact::Derived {
            minutes_played,
            value_tier,
        } => {
            let derived = &params.injury.derived;
            let minutes_share = (minutes_played / derived.minutes_full).clamp(0.0, 1.0);
            derived.minutes_weight * minutes_share
                + derived.tier_weight * params.injury.tier_scores.score(value_tier)
        }
    }
}

/// Net rating effect of recent squad moves. Each transfer phases in linearly
/// over its kind's ramp window, counting positive for arrivals and negative
/// for departures. Events dated after `as_of` contribute nothing.
pub fn transfer_adjustment(
    transfers: &[TransferEvent],
    as_of: NaiveDate,
    params: &RatingParameters,
) -> f64 {
    let mut total = 0.0;
    for event in transfers {
        let elapsed = (as_of - event.effective).num_days() as f64;
        let ramp = (elapsed / params.transfer.ramp_days.days(event.kind)).clamp(0.0, 1.0);
        let contribution = params.transfer.scale * event.impact * ramp;
        total += match event.direction {
            TransferDirection::In => contribution,
            TransferDirection::Out => -contribution,
        };
    }
    total
}

/// Bonus or penalty from a recent manager change, decaying exponentially
/// toward zero. Elapsed time is clamped at zero days so an announced but
/// future-dated change never makes the exponential grow.
pub fn manager_adjustment(
    change: Option<&ManagerChange>,
    as_of: NaiveDate,
    params: &RatingParameters,
) -> f64 {
    let Some(change) = change else {
        return 0.0;
    };
    let elapsed = (as_of - change.changed_on).num_days().max(0) as f64;
    params.manager.tier_deltas.delta(change.tier) * (-elapsed / params.manager.decay_days).exp()
}

/// Penalty for a congested schedule: rest days missing below the floor and
/// matches played beyond the 14-day ceiling each cost rating points. A
/// rested team with a normal schedule is exactly neutral.
pub fn fatigue_adjustment(rest_days: u32, matches_in_14_days: u32, params: &RatingParameters) -> f64 {
    let fatigue = &params.fatigue;
    let rest_deficit = fatigue.rest_days_floor.saturating_sub(rest_days) as f64;
    let congestion = matches_in_14_days.saturating_sub(fatigue.matches_ceiling) as f64;
    -(fatigue.rest_penalty * rest_deficit + fatigue.congestion_penalty * congestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AbsenceDuration, AvailabilityStatus, ManagerTier, Position, TransferKind, ValueTier,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn absence(impact: AbsenceImpact) -> PlayerAbsence {
        PlayerAbsence {
            player_id: 7,
            impact,
            status: AvailabilityStatus::Out,
            position: Position::Midfielder,
            duration: AbsenceDuration::LongTerm,
        }
    }

    #[test]
    fn empty_inputs_are_exactly_neutral() {
        let params = RatingParameters::default();
        assert_eq!(injury_adjustment(&[], &params), 0.0);
        assert_eq!(transfer_adjustment(&[], date(2025, 8, 1), &params), 0.0);
        assert_eq!(manager_adjustment(None, date(2025, 8, 1), &params), 0.0);
        assert_eq!(fatigue_adjustment(4, 0, &params), 0.0);
    }

    #[test]
    fn single_out_long_term_absence_closed_form() {
        let params = RatingParameters::default();
        // scale 18, status out 1.0, midfielder 1.0, long term 1.25.
        let got = injury_adjustment(&[absence(AbsenceImpact::Direct(0.7))], &params);
        assert!((got - (-18.0 * 0.7 * 1.0 * 1.0 * 1.25)).abs() < 1e-9);
        assert!((got - (-15.75)).abs() < 1e-9);
    }

    #[test]
    fn absences_accumulate() {
        let params = RatingParameters::default();
        let one = injury_adjustment(&[absence(AbsenceImpact::Direct(0.5))], &params);
        let two = injury_adjustment(
            &[
                absence(AbsenceImpact::Direct(0.5)),
                absence(AbsenceImpact::Direct(0.5)),
            ],
            &params,
        );
        assert!((two - 2.0 * one).abs() < 1e-9);
    }

    #[test]
    fn derived_impact_blends_minutes_and_tier() {
        let params = RatingParameters::default();
        let impact = AbsenceImpact::Derived {
            minutes_played: 450.0,
            value_tier: ValueTier::High,
        };
        // 0.6 * (450/900) + 0.4 * 0.8 = 0.62
        let got = injury_adjustment(&[absence(impact)], &params);
        assert!((got - (-18.0 * 0.62 * 1.25)).abs() < 1e-9);
    }

    #[test]
    fn derived_impact_saturates_at_full_minutes() {
        let params = RatingParameters::default();
        let regular = AbsenceImpact::Derived {
            minutes_played: 900.0,
            value_tier: ValueTier::Mid,
        };
        let iron_man = AbsenceImpact::Derived {
            minutes_played: 2500.0,
            value_tier: ValueTier::Mid,
        };
        assert_eq!(
            injury_adjustment(&[absence(regular)], &params),
            injury_adjustment(&[absence(iron_man)], &params)
        );
    }

    #[test]
    fn direct_impact_is_clamped_to_unit_interval() {
        let params = RatingParameters::default();
        let over = injury_adjustment(&[absence(AbsenceImpact::Direct(1.7))], &params);
        let max = injury_adjustment(&[absence(AbsenceImpact::Direct(1.0))], &params);
        assert_eq!(over, max);
        assert_eq!(
            injury_adjustment(&[absence(AbsenceImpact::Direct(-0.3))], &params),
            0.0
        );
    }

    #[test]
    fn doubtful_weighs_less_than_out() {
        let params = RatingParameters::default();
        let mut doubtful = absence(AbsenceImpact::Direct(0.8));
        doubtful.status = AvailabilityStatus::Doubtful;
        let out = injury_adjustment(&[absence(AbsenceImpact::Direct(0.8))], &params);
        let maybe = injury_adjustment(&[doubtful], &params);
        assert!(maybe.abs() < out.abs());
    }

    #[test]
    fn transfer_in_ramps_linearly() {
        let params = RatingParameters::default();
        let event = TransferEvent {
            player_id: 10,
            impact: 0.8,
            direction: TransferDirection::In,
            kind: TransferKind::Permanent,
            effective: date(2025, 7, 1),
        };
        // 15 of 30 ramp days elapsed.
        let got = transfer_adjustment(&[event], date(2025, 7, 16), &params);
        assert!((got - params.transfer.scale * 0.8 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn transfer_out_subtracts() {
        let params = RatingParameters::default();
        let event = TransferEvent {
            player_id: 10,
            impact: 0.6,
            direction: TransferDirection::Out,
            kind: TransferKind::Permanent,
            effective: date(2025, 5, 1),
        };
        // Fully ramped by August.
        let got = transfer_adjustment(&[event], date(2025, 8, 1), &params);
        assert!((got - (-params.transfer.scale * 0.6)).abs() < 1e-9);
    }

    #[test]
    fn future_transfer_contributes_nothing() {
        let params = RatingParameters::default();
        let event = TransferEvent {
            player_id: 10,
            impact: 1.0,
            direction: TransferDirection::In,
            kind: TransferKind::Loan,
            effective: date(2025, 9, 1),
        };
        assert_eq!(transfer_adjustment(&[event], date(2025, 8, 1), &params), 0.0);
    }

    #[test]
    fn loan_ramps_faster_than_permanent() {
        let params = RatingParameters::default();
        let loan = TransferEvent {
            player_id: 1,
            impact: 0.5,
            direction: TransferDirection::In,
            kind: TransferKind::Loan,
            effective: date(2025, 7, 1),
        };
        let permanent = TransferEvent {
            kind: TransferKind::Permanent,
            ..loan.clone()
        };
        let as_of = date(2025, 7, 8);
        assert!(
            transfer_adjustment(&[loan], as_of, &params)
                > transfer_adjustment(&[permanent], as_of, &params)
        );
    }

    #[test]
    fn manager_bounce_decays_to_one_over_e() {
        let params = RatingParameters::default();
        let change = ManagerChange {
            tier: ManagerTier::Elite,
            changed_on: date(2025, 6, 1),
        };
        // decay_days 45, elapsed 45.
        let got = manager_adjustment(Some(&change), date(2025, 7, 16), &params);
        assert!((got - 20.0 * (-1.0f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn fresh_manager_change_pays_full_tier_delta() {
        let params = RatingParameters::default();
        let change = ManagerChange {
            tier: ManagerTier::Interim,
            changed_on: date(2025, 8, 1),
        };
        let got = manager_adjustment(Some(&change), date(2025, 8, 1), &params);
        assert_eq!(got, params.manager.tier_deltas.interim);
    }

    #[test]
    fn future_dated_manager_change_does_not_grow() {
        let params = RatingParameters::default();
        let change = ManagerChange {
            tier: ManagerTier::Elite,
            changed_on: date(2025, 9, 1),
        };
        let got = manager_adjustment(Some(&change), date(2025, 8, 1), &params);
        assert_eq!(got, params.manager.tier_deltas.elite);
    }

    #[test]
    fn fatigue_penalizes_short_rest() {
        let params = RatingParameters::default();
        // rest penalty 2, two days below the floor of 4, no congestion.
        assert!((fatigue_adjustment(2, 0, &params) - (-4.0)).abs() < 1e-12);
    }

    #[test]
    fn fatigue_penalizes_congestion() {
        let params = RatingParameters::default();
        // congestion penalty 3, two matches over the ceiling of 4.
        assert!((fatigue_adjustment(4, 6, &params) - (-6.0)).abs() < 1e-12);
        // Both terms stack.
        assert!((fatigue_adjustment(2, 6, &params) - (-10.0)).abs() < 1e-12);
    }

    #[test]
    fn well_rested_light_schedule_is_neutral() {
        let params = RatingParameters::default();
        assert_eq!(fatigue_adjustment(10, 2, &params), 0.0);
        assert_eq!(fatigue_adjustment(4, 4, &params), 0.0);
    }
}
