//! Error types for the transit-limb crate.

/// Error type for all fallible operations in the transit-limb crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LimbError {
    /// Returned when the coefficient slice does not hold exactly four values.
    #[error("expected 4 limb-darkening coefficients, got {got}")]
    CoefficientCount {
        /// Number of coefficients supplied.
        got: usize,
    },

    /// Returned when a limb-darkening coefficient is NaN or infinite.
    #[error("limb-darkening coefficient c{index} is not finite: {value}")]
    NonFiniteCoefficient {
        /// 1-indexed coefficient position (c1..c4).
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a normalised radius lies outside the stellar disk.
    #[error("radius {r} lies outside the stellar disk [0, 1]")]
    RadiusOutOfRange {
        /// The offending radius.
        r: f64,
    },

    /// Returned when integration bounds violate `0 <= rlow <= rhigh <= 1`.
    #[error("invalid radial bounds [{rlow}, {rhigh}] (need 0 <= rlow <= rhigh <= 1)")]
    InvalidBounds {
        /// Lower bound.
        rlow: f64,
        /// Upper bound.
        rhigh: f64,
    },

    /// Returned when the integration step is non-finite or outside `[min, max]`.
    #[error("integration step must be finite and in [{min}, {max}], got {step}")]
    InvalidStep {
        /// The offending step.
        step: f64,
        /// Smallest accepted step.
        min: f64,
        /// Largest accepted step.
        max: f64,
    },
}
