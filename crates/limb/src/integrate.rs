//! Fixed-step radial integration of the intensity profile.

use crate::error::LimbError;
use crate::law::LimbDarkening;

/// Default radial step for integration.
///
/// Accuracy and cost are both controlled by this value: the truncation bias
/// of the rectangle sum is proportional to the step, and each call costs
/// `(rhigh - rlow) / step` intensity evaluations.
pub const DEFAULT_STEP: f64 = 0.001;

/// Finest accepted radial step.
///
/// Bounds the per-call sample count and the size of a
/// [`CumulativeIntensity`](crate::CumulativeIntensity) table to about a million.
pub const MIN_STEP: f64 = 1e-6;

/// Coarsest accepted radial step.
pub const MAX_STEP: f64 = 0.1;

/// Checks that `step` is finite and in `[MIN_STEP, MAX_STEP]`.
pub fn validate_step(step: f64) -> Result<(), LimbError> {
    if !step.is_finite() || step < MIN_STEP || step > MAX_STEP {
        return Err(LimbError::InvalidStep {
            step,
            min: MIN_STEP,
            max: MAX_STEP,
        });
    }
    Ok(())
}

/// Checks `0 <= rlow <= rhigh <= 1`. NaN bounds fail every comparison.
pub(crate) fn check_bounds(rlow: f64, rhigh: f64) -> Result<(), LimbError> {
    if rlow >= 0.0 && rlow <= rhigh && rhigh <= 1.0 {
        Ok(())
    } else {
        Err(LimbError::InvalidBounds { rlow, rhigh })
    }
}

/// Rectangle-rule integrator for `int_{rlow}^{rhigh} I(r) 2r dr`.
///
/// Samples `r = rlow + k * step` for `k = 0, 1, ...` while `r <= rhigh` and
/// accumulates `I(r) * step * 2r`. The upper end may be under-covered by less
/// than one step; that bias is not corrected.
///
/// # Example
///
/// ```
/// use transit_limb::{LimbDarkening, RectangleIntegrator};
///
/// let integrator = RectangleIntegrator::new(LimbDarkening::uniform(), 0.001).unwrap();
/// let area = integrator.integrate(0.0, 1.0).unwrap();
/// assert!((area - 1.0).abs() < 2e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RectangleIntegrator {
    law: LimbDarkening,
    step: f64,
}

impl RectangleIntegrator {
    /// Creates an integrator for `law` with the given radial step.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::InvalidStep`] if the step is rejected by [`validate_step`].
    pub fn new(law: LimbDarkening, step: f64) -> Result<Self, LimbError> {
        validate_step(step)?;
        Ok(Self { law, step })
    }

    /// Creates an integrator using [`DEFAULT_STEP`].
    pub fn with_default_step(law: LimbDarkening) -> Self {
        Self {
            law,
            step: DEFAULT_STEP,
        }
    }

    /// Returns the limb-darkening law being integrated.
    pub fn law(&self) -> &LimbDarkening {
        &self.law
    }

    /// Returns the radial step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Approximates `int_{rlow}^{rhigh} I(r) 2r dr`.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::InvalidBounds`] unless `0 <= rlow <= rhigh <= 1`.
    pub fn integrate(&self, rlow: f64, rhigh: f64) -> Result<f64, LimbError> {
        check_bounds(rlow, rhigh)?;
        let mut sum = 0.0;
        let mut k: usize = 0;
        loop {
            let r = rlow + k as f64 * self.step;
            if r > rhigh {
                break;
            }
            sum += self.law.intensity_unchecked(r) * self.step * 2.0 * r;
            k += 1;
        }
        Ok(sum)
    }
}

/// One-shot form of [`RectangleIntegrator::integrate`].
pub fn integrated_intensity(
    law: &LimbDarkening,
    step: f64,
    rlow: f64,
    rhigh: f64,
) -> Result<f64, LimbError> {
    RectangleIntegrator::new(*law, step)?.integrate(rlow, rhigh)
}
