use crate::error::{RatingError, Result};
use crate::params::RatingParameters;

/// Map an unbounded raw rating onto the bounded display interval through a
/// logistic curve centered on `midpoint`. Strictly increasing in `raw`;
/// extreme inputs saturate at the interval edges.
pub fn to_display(raw: f64, params: &RatingParameters) -> f64 {
    let display = &params.display;
    let s = 1.0 / (1.0 + (-(raw - display.midpoint) / display.scale).exp());
    display.min + (display.max - display.min) * s
}

/// Invert [`to_display`]. The logit is unbounded at the interval edges, so
/// only values strictly inside `(min, max)` are accepted.
pub fn to_raw(display_value: f64, params: &RatingParameters) -> Result<f64> {
    let display = &params.display;
    if display_value <= display.min || display_value >= display.max {
        return Err(RatingError::DisplayOutOfRange {
            display: display_value,
            min: display.min,
            max: display.max,
        }
        .into());
    }
    let s = (display_value - display.min) / (display.max - display.min);
    Ok(display.midpoint + display.scale * (s / (1.0 - s)).ln())
}
