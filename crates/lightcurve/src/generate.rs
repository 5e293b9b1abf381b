//! Light-curve generation.

use std::f64::consts::PI;

use rayon::prelude::*;
use transit_limb::{CumulativeIntensity, LimbDarkening, RectangleIntegrator};

use crate::clamp::{acos_clamped, sqrt_clamped};
use crate::config::{IntegrationMethod, LightCurveConfig};
use crate::error::LightCurveError;
use crate::geometry::{DerivedGeometry, Regime, TransitState};
use crate::params::SystemParams;

/// Radial integral backend selected by [`IntegrationMethod`].
#[derive(Debug, Clone)]
enum RadialIntegral {
    Direct(RectangleIntegrator),
    Table(CumulativeIntensity),
}

impl RadialIntegral {
    fn new(law: LimbDarkening, config: &LightCurveConfig) -> Result<Self, LightCurveError> {
        Ok(match config.method() {
            IntegrationMethod::Direct => Self::Direct(RectangleIntegrator::new(law, config.step())?),
            IntegrationMethod::Table => Self::Table(CumulativeIntensity::new(&law, config.step())?),
        })
    }

    fn integrate(&self, rlow: f64, rhigh: f64) -> Result<f64, LightCurveError> {
        Ok(match self {
            Self::Direct(integ) => integ.integrate(rlow, rhigh)?,
            Self::Table(table) => table.integrate(rlow, rhigh)?,
        })
    }
}

/// A system prepared for repeated flux evaluation.
///
/// Holds the derived geometry and the radial integrator, both computed once
/// and shared read-only by every timestamp.
///
/// # Example
///
/// ```
/// use transit_limb::LimbDarkening;
/// use transit_lightcurve::{FluxModel, LightCurveConfig, SystemParams};
///
/// let limb = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
/// let params = SystemParams::new(0.0475, 1.155, 1.359, 3.5247, 2_452_826.6285, 86.7, limb);
/// let model = FluxModel::new(&params, &LightCurveConfig::default()).unwrap();
///
/// let f = model.flux(2_452_826.6285).unwrap();
/// assert!(f < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct FluxModel {
    geometry: DerivedGeometry,
    integral: RadialIntegral,
    step: f64,
    eclipse_window: f64,
}

impl FluxModel {
    /// Validates `params` and `config` and precomputes everything shared
    /// across timestamps.
    pub fn new(params: &SystemParams, config: &LightCurveConfig) -> Result<Self, LightCurveError> {
        config.validate()?;
        let geometry = DerivedGeometry::new(params)?;
        let integral = RadialIntegral::new(params.limb, config)?;
        Ok(Self {
            geometry,
            integral,
            step: config.step(),
            eclipse_window: config.eclipse_window(),
        })
    }

    /// Returns the derived geometry.
    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    /// Geometric state at Julian date `jd`.
    pub fn state_at(&self, jd: f64) -> TransitState {
        self.geometry.state_at(jd, self.eclipse_window)
    }

    /// Relative flux at Julian date `jd`.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::NonFiniteTimestamp`] if `jd` is NaN or infinite.
    pub fn flux(&self, jd: f64) -> Result<f64, LightCurveError> {
        if !jd.is_finite() {
            return Err(LightCurveError::NonFiniteTimestamp {
                index: 0,
                value: jd,
            });
        }
        let state = self.state_at(jd);
        self.flux_for(state.regime, state.separation)
    }

    /// Relative flux at projected separation `z`, ignoring the eclipse window.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::InvalidSeparation`] unless `z` is finite and
    /// non-negative.
    pub fn flux_at_separation(&self, z: f64) -> Result<f64, LightCurveError> {
        if !z.is_finite() || z < 0.0 {
            return Err(LightCurveError::InvalidSeparation { z });
        }
        let regime = Regime::classify(z, self.geometry.radius_ratio());
        self.flux_for(regime, z)
    }

    fn flux_for(&self, regime: Regime, z: f64) -> Result<f64, LightCurveError> {
        let p = self.geometry.radius_ratio();
        let omega = self.geometry.omega();
        match regime {
            Regime::OutOfEclipseWindow | Regime::NoOverlap => Ok(1.0),
            Regime::FullOverlap => {
                let i_star = self.mean_intensity(z - p, z + p)?;
                Ok(1.0 - p * p * i_star / (4.0 * omega))
            }
            Regime::PartialOverlap => {
                let i_star = self.mean_intensity(z - p, 1.0)?;
                let zm1 = z - 1.0;
                let root = sqrt_clamped(p * p - zm1 * zm1);
                let angle = acos_clamped(zm1 / p);
                if root.was_clamped() || angle.was_clamped() {
                    tracing::trace!(z, ?root, ?angle, "overlap terms clamped at contact");
                }
                let sqrt_term = zm1 * root.value();
                let acos_term = p * p * angle.value();
                Ok(1.0 - i_star * (acos_term - sqrt_term) / (4.0 * PI * omega))
            }
        }
    }

    /// Area-weighted mean intensity `int I(r) 2r dr / int 2r dr` over the
    /// radii `[rlow, rhigh]` clipped to the stellar disk.
    fn mean_intensity(&self, rlow: f64, rhigh: f64) -> Result<f64, LightCurveError> {
        let lo = rlow.clamp(0.0, 1.0);
        let hi = rhigh.clamp(lo, 1.0);
        if hi - lo < self.step {
            return Ok(self.geometry.limb().intensity(0.5 * (lo + hi))?);
        }
        let integral = self.integral.integrate(lo, hi)?;
        Ok(integral / (hi * hi - lo * lo))
    }
}

fn check_timestamps(jd: &[f64]) -> Result<(), LightCurveError> {
    match jd.iter().position(|t| !t.is_finite()) {
        Some(index) => Err(LightCurveError::NonFiniteTimestamp {
            index,
            value: jd[index],
        }),
        None => Ok(()),
    }
}

/// Computes the relative flux at each Julian date with the default configuration.
///
/// The output has the same length and order as `jd`; out-of-transit points
/// are exactly 1.
///
/// # Errors
///
/// Returns [`LightCurveError`] if the parameters are invalid or any timestamp
/// is non-finite.
pub fn generate_synthetic(
    jd: &[f64],
    params: &SystemParams,
) -> Result<Vec<f64>, LightCurveError> {
    generate_synthetic_with(jd, params, &LightCurveConfig::default())
}

/// Computes the relative flux at each Julian date.
///
/// See [`generate_synthetic`]; `config` selects the integration step, method,
/// eclipse window and whether timestamps are evaluated in parallel.
pub fn generate_synthetic_with(
    jd: &[f64],
    params: &SystemParams,
    config: &LightCurveConfig,
) -> Result<Vec<f64>, LightCurveError> {
    let mut out = vec![1.0; jd.len()];
    generate_synthetic_into(jd, params, config, &mut out)?;
    Ok(out)
}

/// Computes the relative flux at each Julian date into a pre-allocated buffer.
///
/// # Errors
///
/// Returns [`LightCurveError::BufferLengthMismatch`] if `out.len() != jd.len()`,
/// plus the errors of [`generate_synthetic`].
#[tracing::instrument(skip_all, fields(n = jd.len(), method = ?config.method(), parallel = config.parallel()))]
pub fn generate_synthetic_into(
    jd: &[f64],
    params: &SystemParams,
    config: &LightCurveConfig,
    out: &mut [f64],
) -> Result<(), LightCurveError> {
    if out.len() != jd.len() {
        return Err(LightCurveError::BufferLengthMismatch {
            expected: jd.len(),
            got: out.len(),
        });
    }
    check_timestamps(jd)?;
    let model = FluxModel::new(params, config)?;

    if config.parallel() {
        out.par_iter_mut()
            .zip(jd.par_iter())
            .try_for_each(|(f, &t)| -> Result<(), LightCurveError> {
                *f = model.flux(t)?;
                Ok(())
            })?;
    } else {
        for (f, &t) in out.iter_mut().zip(jd) {
            *f = model.flux(t)?;
        }
    }

    tracing::debug!(
        min_flux = out.iter().copied().fold(f64::INFINITY, f64::min),
        "light curve generated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use transit_constants::{R_JUP, R_SUN};

    const EPOCH: f64 = 2_455_000.0;

    /// Edge-on system with p = 0.1 exactly.
    fn params(limb: LimbDarkening) -> SystemParams {
        SystemParams::new(0.05, 1.0, 0.1 * R_SUN / R_JUP, 3.0, EPOCH, 90.0, limb)
    }

    fn model(limb: LimbDarkening, method: IntegrationMethod) -> FluxModel {
        let config = LightCurveConfig::new().with_method(method);
        FluxModel::new(&params(limb), &config).unwrap()
    }

    #[test]
    fn uniform_disk_depth() {
        let m = model(LimbDarkening::uniform(), IntegrationMethod::Direct);
        assert_abs_diff_eq!(m.geometry().radius_ratio(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(m.flux(EPOCH).unwrap(), 0.99, epsilon = 2e-3);
    }

    #[test]
    fn uniform_disk_depth_table() {
        let m = model(LimbDarkening::uniform(), IntegrationMethod::Table);
        assert_abs_diff_eq!(m.flux(EPOCH).unwrap(), 0.99, epsilon = 1e-4);
    }

    #[test]
    fn mid_transit_separation_zero_is_finite() {
        let m = model(LimbDarkening::uniform(), IntegrationMethod::Direct);
        let f = m.flux_at_separation(0.0).unwrap();
        assert!(f.is_finite());
        assert_abs_diff_eq!(f, 0.99, epsilon = 2e-3);
    }

    #[test]
    fn last_contact_is_unity() {
        let law = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
        let m = model(law, IntegrationMethod::Direct);
        let f = m.flux_at_separation(1.1).unwrap();
        assert!(f.is_finite());
        assert_abs_diff_eq!(f, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn no_overlap_is_exactly_one() {
        let law = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
        let m = model(law, IntegrationMethod::Direct);
        assert_eq!(m.flux_at_separation(1.2).unwrap(), 1.0);
        assert_eq!(m.flux_at_separation(5.0).unwrap(), 1.0);
    }

    #[test]
    fn limb_darkened_centre_is_deeper_than_limb() {
        let law = LimbDarkening::new(0.0, 0.6, 0.0, 0.0).unwrap();
        let m = model(law, IntegrationMethod::Direct);
        let centre = m.flux_at_separation(0.0).unwrap();
        let near_limb = m.flux_at_separation(0.85).unwrap();
        assert!(centre < near_limb, "centre {centre}, near limb {near_limb}");
    }

    #[test]
    fn rejects_invalid_separation() {
        let m = model(LimbDarkening::uniform(), IntegrationMethod::Direct);
        for z in [f64::NAN, -0.5, f64::INFINITY] {
            assert!(matches!(
                m.flux_at_separation(z),
                Err(LightCurveError::InvalidSeparation { .. })
            ));
        }
        assert!(m.flux_at_separation(0.0).is_ok());
    }

    #[test]
    fn rejects_non_finite_julian_date() {
        let m = model(LimbDarkening::uniform(), IntegrationMethod::Table);
        assert!(matches!(
            m.flux(f64::NAN),
            Err(LightCurveError::NonFiniteTimestamp { .. })
        ));
    }

    #[test]
    fn buffer_mismatch_error() {
        let jd = [EPOCH; 4];
        let mut out = [0.0; 3];
        let result = generate_synthetic_into(
            &jd,
            &params(LimbDarkening::uniform()),
            &LightCurveConfig::default(),
            &mut out,
        );
        assert!(matches!(
            result,
            Err(LightCurveError::BufferLengthMismatch {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn non_finite_timestamp_error() {
        let jd = [EPOCH, EPOCH + 0.01, f64::NAN];
        let result = generate_synthetic(&jd, &params(LimbDarkening::uniform()));
        assert!(matches!(
            result,
            Err(LightCurveError::NonFiniteTimestamp { index: 2, .. })
        ));
    }

    #[test]
    fn empty_input() {
        let out = generate_synthetic(&[], &params(LimbDarkening::uniform())).unwrap();
        assert!(out.is_empty());
    }
}
