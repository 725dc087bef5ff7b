use thiserror::Error;

/// Errors raised by the gimbal model and its supporting pieces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GimbalError {
    #[error("negative timestep: {0} s (dt must be >= 0)")]
    NegativeTimestep(f64),

    #[error("non-finite timestep: {0}")]
    NonFiniteTimestep(f64),

    #[error("invalid servo rate: {0} deg/s (must be finite and > 0)")]
    InvalidRate(f64),

    #[error("invalid thrust curve: {0}")]
    InvalidThrustCurve(String),

    #[error("invalid value for {field}: {message}")]
    InvalidConfig { field: &'static str, message: String },
}
