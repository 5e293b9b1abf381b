//! Configuration for light-curve generation.

use transit_limb::{DEFAULT_STEP, validate_step};

use crate::error::LightCurveError;

/// Half-width, in orbital phase, of the window around mid-transit in which
/// the transit is modelled.
///
/// Outside `|phase| < 0.25` the flux is set to 1. This is a heuristic that
/// suppresses the secondary eclipse near phase 0.5; it is not derived from
/// the eclipse geometry.
pub const ECLIPSE_WINDOW_HALF_WIDTH: f64 = 0.25;

/// How the radial intensity integral is evaluated for each timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// Fixed-step rectangle sum per timestamp.
    #[default]
    Direct,
    /// Cumulative lookup table built once per model, O(1) per timestamp.
    Table,
}

/// Configuration for [`generate_synthetic_with`](crate::generate_synthetic_with).
///
/// # Example
///
/// ```
/// use transit_lightcurve::{IntegrationMethod, LightCurveConfig};
///
/// let config = LightCurveConfig::new()
///     .with_step(0.0005)
///     .with_method(IntegrationMethod::Table)
///     .with_parallel(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LightCurveConfig {
    step: f64,
    eclipse_window: f64,
    method: IntegrationMethod,
    parallel: bool,
}

impl LightCurveConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `step = 0.001`, `eclipse_window = 0.25`, `method = Direct`,
    /// `parallel = false`.
    pub fn new() -> Self {
        Self {
            step: DEFAULT_STEP,
            eclipse_window: ECLIPSE_WINDOW_HALF_WIDTH,
            method: IntegrationMethod::Direct,
            parallel: false,
        }
    }

    /// Sets the radial integration step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the eclipse window half-width in phase.
    pub fn with_eclipse_window(mut self, half_width: f64) -> Self {
        self.eclipse_window = half_width;
        self
    }

    /// Sets the integration method.
    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Enables or disables parallel evaluation across timestamps.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // --- Accessors ---

    /// Returns the radial integration step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the eclipse window half-width.
    pub fn eclipse_window(&self) -> f64 {
        self.eclipse_window
    }

    /// Returns the integration method.
    pub fn method(&self) -> IntegrationMethod {
        self.method
    }

    /// Returns true if timestamps are evaluated in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), LightCurveError> {
        validate_step(self.step)?;
        let w = self.eclipse_window;
        if w.is_nan() || w <= 0.0 || w > 0.5 {
            return Err(LightCurveError::InvalidEclipseWindow {
                value: self.eclipse_window,
            });
        }
        Ok(())
    }
}

impl Default for LightCurveConfig {
    fn default() -> Self {
        Self::new()
    }
}
