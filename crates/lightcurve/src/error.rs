//! Error types for the transit-lightcurve crate.

use transit_limb::LimbError;

/// Error type for all fallible operations in the transit-lightcurve crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LightCurveError {
    /// Returned when a limb-darkening or integration precondition fails.
    #[error(transparent)]
    Limb(#[from] LimbError),

    /// Returned when a system parameter is out of its physical range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// Returned when the planet is at least as large as the star.
    #[error("planet/star radius ratio {ratio} must be < 1")]
    PlanetLargerThanStar {
        /// Planet-to-star radius ratio.
        ratio: f64,
    },

    /// Returned when an observation time is NaN or infinite.
    #[error("timestamp at index {index} is not finite: {value}")]
    NonFiniteTimestamp {
        /// Position in the input sequence.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a projected separation is NaN, infinite or negative.
    #[error("projected separation must be finite and non-negative, got {z}")]
    InvalidSeparation {
        /// The offending separation.
        z: f64,
    },

    /// Returned when the eclipse window half-width is outside `(0, 0.5]`.
    #[error("eclipse window half-width must be in (0, 0.5], got {value}")]
    InvalidEclipseWindow {
        /// The offending value.
        value: f64,
    },

    /// Returned when a pre-allocated buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
}
