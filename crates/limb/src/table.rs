//! Precomputed cumulative intensity for O(1) radial integrals.

use crate::error::LimbError;
use crate::integrate::{check_bounds, validate_step};
use crate::law::LimbDarkening;

/// Cumulative intensity `C(r) = int_0^r I(s) 2s ds` tabulated on a uniform grid.
///
/// Nodes sit at `r_k = k * step`, with the final node pinned to exactly 1.
/// The table is filled once with the trapezoid rule; an integral over
/// `[rlow, rhigh]` is then `C(rhigh) - C(rlow)` with linear interpolation
/// between nodes.
#[derive(Debug, Clone)]
pub struct CumulativeIntensity {
    step: f64,
    radii: Vec<f64>,
    cumulative: Vec<f64>,
}

impl CumulativeIntensity {
    /// Tabulates the cumulative intensity of `law` with the given step.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::InvalidStep`] if the step is rejected by [`validate_step`].
    pub fn new(law: &LimbDarkening, step: f64) -> Result<Self, LimbError> {
        validate_step(step)?;
        let n = (1.0 / step).ceil() as usize;
        let radii: Vec<f64> = (0..=n).map(|k| (k as f64 * step).min(1.0)).collect();

        let integrand = |r: f64| law.intensity_unchecked(r) * 2.0 * r;
        let mut cumulative = Vec::with_capacity(radii.len());
        cumulative.push(0.0);
        let mut prev_f = integrand(radii[0]);
        for w in radii.windows(2) {
            let f = integrand(w[1]);
            let last = cumulative.last().copied().unwrap_or(0.0);
            cumulative.push(last + 0.5 * (prev_f + f) * (w[1] - w[0]));
            prev_f = f;
        }

        tracing::debug!(nodes = radii.len(), step, "tabulated cumulative intensity");
        Ok(Self {
            step,
            radii,
            cumulative,
        })
    }

    /// Returns the grid step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of grid nodes.
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Always false: the grid holds at least the nodes 0 and 1.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Disk-integrated intensity `C(1)`, approximately `4 * Omega`.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Interpolated `C(r)`; callers guarantee `0 <= r <= 1`.
    fn at(&self, r: f64) -> f64 {
        let last = self.radii.len() - 1;
        let k = ((r / self.step) as usize).min(last - 1);
        let (r0, r1) = (self.radii[k], self.radii[k + 1]);
        let (c0, c1) = (self.cumulative[k], self.cumulative[k + 1]);
        if r1 <= r0 {
            return c0;
        }
        let frac = ((r - r0) / (r1 - r0)).clamp(0.0, 1.0);
        c0 + frac * (c1 - c0)
    }

    /// Cumulative intensity at `r`.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::RadiusOutOfRange`] unless `0 <= r <= 1`.
    pub fn cumulative(&self, r: f64) -> Result<f64, LimbError> {
        if !(0.0..=1.0).contains(&r) {
            return Err(LimbError::RadiusOutOfRange { r });
        }
        Ok(self.at(r))
    }

    /// Approximates `int_{rlow}^{rhigh} I(r) 2r dr`.
    ///
    /// # Errors
    ///
    /// Returns [`LimbError::InvalidBounds`] unless `0 <= rlow <= rhigh <= 1`.
    pub fn integrate(&self, rlow: f64, rhigh: f64) -> Result<f64, LimbError> {
        check_bounds(rlow, rhigh)?;
        Ok(self.at(rhigh) - self.at(rlow))
    }
}
