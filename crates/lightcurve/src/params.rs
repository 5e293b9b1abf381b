//! Physical description of a star-planet system.

use transit_limb::LimbDarkening;

use crate::error::LightCurveError;

/// Orbital, stellar and planetary parameters of a transiting system.
///
/// Units follow the usual observational conventions; they are converted to
/// stellar radii and seconds in [`DerivedGeometry`](crate::DerivedGeometry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParams {
    /// Orbital semi-major axis (AU).
    pub a: f64,
    /// Stellar radius (solar radii).
    pub rs: f64,
    /// Planetary radius (Jupiter radii).
    pub rp: f64,
    /// Orbital period (days).
    pub period: f64,
    /// Time of mid-transit (Julian date).
    pub epoch: f64,
    /// Orbital inclination (degrees); 90 is edge-on.
    pub inclination: f64,
    /// Nonlinear limb-darkening law.
    pub limb: LimbDarkening,
}

impl SystemParams {
    /// Bundles the system parameters. Call [`validate`](Self::validate) before use.
    pub fn new(
        a: f64,
        rs: f64,
        rp: f64,
        period: f64,
        epoch: f64,
        inclination: f64,
        limb: LimbDarkening,
    ) -> Self {
        Self {
            a,
            rs,
            rp,
            period,
            epoch,
            inclination,
            limb,
        }
    }

    /// Replaces the limb-darkening law.
    pub fn with_limb(mut self, limb: LimbDarkening) -> Self {
        self.limb = limb;
        self
    }

    /// Replaces the inclination (degrees).
    pub fn with_inclination(mut self, inclination: f64) -> Self {
        self.inclination = inclination;
        self
    }

    /// Checks that every parameter is finite and physically meaningful.
    ///
    /// `a`, `rs`, `rp` and `period` must be positive, `inclination` must lie
    /// in `[0, 180]` and `epoch` must be finite. The radius ratio is checked
    /// when the geometry is derived.
    pub fn validate(&self) -> Result<(), LightCurveError> {
        for (name, value) in [
            ("a", self.a),
            ("rs", self.rs),
            ("rp", self.rp),
            ("period", self.period),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LightCurveError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }
        if !self.epoch.is_finite() {
            return Err(LightCurveError::InvalidParameter {
                name: "epoch",
                value: self.epoch,
                reason: "must be finite",
            });
        }
        if !(0.0..=180.0).contains(&self.inclination) {
            return Err(LightCurveError::InvalidParameter {
                name: "inclination",
                value: self.inclination,
                reason: "must be in [0, 180] degrees",
            });
        }
        Ok(())
    }
}
