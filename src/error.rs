/// Result type alias used across the engine.
pub type Result<T> = anyhow::Result<T>;

#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("invalid rating parameters: {message}")]
    InvalidParameters { message: String },

    #[error("display value {display} is not strictly inside ({min}, {max})")]
    DisplayOutOfRange { display: f64, min: f64, max: f64 },
}
