use tracing::debug;

use crate::adjustments::{
    fatigue_adjustment, injury_adjustment, manager_adjustment, transfer_adjustment,
};
use crate::display::to_display;
use crate::params::RatingParameters;
use crate::types::{RatingBreakdown, TeamSnapshot};

/// Compose one team's full rating breakdown for the snapshot's as-of date:
/// base rating plus the four situational adjustments, mapped onto the
/// display scale. Every intermediate component is returned.
pub fn compute_rating(snapshot: &TeamSnapshot, params: &RatingParameters) -> RatingBreakdown {
    let injury = injury_adjustment(&snapshot.absences, params);
    let transfer = transfer_adjustment(&snapshot.transfers, snapshot.as_of, params);
    let manager = manager_adjustment(snapshot.manager_change.as_ref(), snapshot.as_of, params);
    let fatigue = fatigue_adjustment(snapshot.rest_days, snapshot.matches_in_14_days, params);

    let total_raw = snapshot.base_rating + injury + transfer + manager + fatigue;
    let display_value = to_display(total_raw, params);

    debug!(
        base = snapshot.base_rating,
        injury,
        transfer,
        manager,
        fatigue,
        total_raw,
        display = display_value,
        "computed rating breakdown"
    );

    RatingBreakdown {
        base: snapshot.base_rating,
        injury,
        transfer,
        manager,
        fatigue,
        total_raw,
        display: display_value,
    }
}
