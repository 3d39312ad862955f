use crate::params::RatingParameters;
use crate::types::{MatchObservation, MatchOutcome};

/// Standard logistic Elo divisor. This is a design constant, not a tunable:
/// changing it rescales the win expectancy curve and with it the effective
/// K-factor sensitivity of every update.
const ELO_SCALE: f64 = 400.0;

/// Post-match rating update for both sides of one finished match. The away
/// delta is the exact negation of the home delta, so total rating mass is
/// conserved across the league.
pub fn update_rating(obs: &MatchObservation, params: &RatingParameters) -> MatchOutcome {
    let home_adv = if obs.neutral_venue {
        0.0
    } else {
        params.elo.home_advantage
    };
    let expected_home = expected_score(obs.home_rating + home_adv, obs.away_rating);
    let expected_away = 1.0 - expected_home;

    let s_home = if obs.home_goals > obs.away_goals {
        1.0
    } else if obs.home_goals < obs.away_goals {
        0.0
    } else {
        0.5
    };

    let k = params.elo.k_base * params.elo.competition_weights.weight(obs.competition);
    let delta = k * (s_home - expected_home) + margin_bonus(obs, params);

    MatchOutcome {
        home_rating: obs.home_rating + delta,
        away_rating: obs.away_rating - delta,
        home_delta: delta,
        expected_home,
        expected_away,
    }
}

// Blowouts move ratings a bit further, but only up to the configured cap so
// a lopsided scoreline cannot produce an unbounded swing.
fn margin_bonus(obs: &MatchObservation, params: &RatingParameters) -> f64 {
    let margin = &params.elo.margin;
    if !margin.enabled {
        return 0.0;
    }
    let cap = margin.cap_goals as f64;
    let gd = (obs.home_goals as f64 - obs.away_goals as f64).clamp(-cap, cap);
    margin.per_goal * gd
}

fn expected_score(r_home: f64, r_away: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf(-(r_home - r_away) / ELO_SCALE))
}
