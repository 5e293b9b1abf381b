//! Sky-projected geometry of a circular orbit.

use std::f64::consts::PI;

use transit_constants::{AU, R_JUP, R_SUN, days_to_seconds, degrees_to_radians};
use transit_limb::{LimbDarkening, N_COEFFS};

use crate::error::LightCurveError;
use crate::params::SystemParams;

/// Radius ratio above which the small-planet approximation degrades.
pub const SMALL_PLANET_LIMIT: f64 = 0.1;

/// Which closed-form expression applies at a given separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Outside the eclipse window around mid-transit; flux is 1.
    OutOfEclipseWindow,
    /// `z > 1 + p`: disks do not touch; flux is 1.
    NoOverlap,
    /// `1 - p < z <= 1 + p`: ingress or egress.
    PartialOverlap,
    /// `z <= 1 - p`: the planet disk lies entirely on the star.
    FullOverlap,
}

impl Regime {
    /// Classifies a projected separation `z` for radius ratio `p`.
    pub fn classify(z: f64, p: f64) -> Self {
        if z <= 1.0 - p {
            Regime::FullOverlap
        } else if z > 1.0 + p {
            Regime::NoOverlap
        } else {
            Regime::PartialOverlap
        }
    }
}

/// Geometric state of the system at one observation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitState {
    /// Seconds since mid-transit.
    pub seconds_since_epoch: f64,
    /// Projected centre-to-centre separation in stellar radii.
    pub separation: f64,
    /// Orbital phase folded into `(-0.5, 0.5]`; 0 at mid-transit.
    pub phase: f64,
    /// Selected regime.
    pub regime: Regime,
}

/// Quantities derived once per system and shared by every timestamp.
#[derive(Debug, Clone)]
pub struct DerivedGeometry {
    epoch: f64,
    period_seconds: f64,
    normalized_distance: f64,
    ang_freq: f64,
    radius_ratio: f64,
    cos_i: f64,
    coefficients: [f64; N_COEFFS + 1],
    omega: f64,
    limb: LimbDarkening,
}

impl DerivedGeometry {
    /// Validates `params` and derives the shared geometry.
    ///
    /// # Errors
    ///
    /// Returns [`LightCurveError::InvalidParameter`] for invalid parameters or
    /// a non-positive normalisation constant, and
    /// [`LightCurveError::PlanetLargerThanStar`] if `p >= 1`.
    pub fn new(params: &SystemParams) -> Result<Self, LightCurveError> {
        params.validate()?;

        let stellar_radius = params.rs * R_SUN;
        let radius_ratio = params.rp * R_JUP / stellar_radius;
        if radius_ratio >= 1.0 {
            return Err(LightCurveError::PlanetLargerThanStar {
                ratio: radius_ratio,
            });
        }
        if radius_ratio > SMALL_PLANET_LIMIT {
            tracing::warn!(
                p = radius_ratio,
                limit = SMALL_PLANET_LIMIT,
                "radius ratio exceeds the small-planet approximation"
            );
        }

        let omega = params.limb.omega();
        if omega <= 0.0 {
            return Err(LightCurveError::InvalidParameter {
                name: "omega",
                value: omega,
                reason: "limb-darkening normalisation must be positive",
            });
        }

        let period_seconds = days_to_seconds(params.period);
        let geom = Self {
            epoch: params.epoch,
            period_seconds,
            normalized_distance: params.a * AU / stellar_radius,
            ang_freq: 2.0 * PI / period_seconds,
            radius_ratio,
            cos_i: degrees_to_radians(params.inclination).cos(),
            coefficients: params.limb.coefficients(),
            omega,
            limb: params.limb,
        };
        tracing::debug!(
            p = geom.radius_ratio,
            a_over_rs = geom.normalized_distance,
            b = geom.impact_parameter(),
            omega = geom.omega,
            "derived system geometry"
        );
        Ok(geom)
    }

    /// Planet-to-star radius ratio `p`.
    pub fn radius_ratio(&self) -> f64 {
        self.radius_ratio
    }

    /// Semi-major axis in stellar radii.
    pub fn normalized_distance(&self) -> f64 {
        self.normalized_distance
    }

    /// Orbital angular frequency (rad/s).
    pub fn ang_freq(&self) -> f64 {
        self.ang_freq
    }

    /// Cosine of the inclination.
    pub fn cos_i(&self) -> f64 {
        self.cos_i
    }

    /// Projected separation at mid-transit, in stellar radii.
    pub fn impact_parameter(&self) -> f64 {
        self.normalized_distance * self.cos_i.abs()
    }

    /// Full coefficient vector `[c0, c1, c2, c3, c4]`.
    pub fn coefficients(&self) -> &[f64; N_COEFFS + 1] {
        &self.coefficients
    }

    /// Limb-darkening normalisation constant.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// The limb-darkening law the coefficients were derived from.
    pub fn limb(&self) -> &LimbDarkening {
        &self.limb
    }

    /// Seconds elapsed since mid-transit at Julian date `jd`.
    pub fn seconds_since_epoch(&self, jd: f64) -> f64 {
        days_to_seconds(jd - self.epoch)
    }

    /// Projected separation `z` in stellar radii, `t` seconds after mid-transit.
    pub fn separation(&self, t: f64) -> f64 {
        let (sin_wt, cos_wt) = (self.ang_freq * t).sin_cos();
        let inclined = self.cos_i * cos_wt;
        self.normalized_distance * (sin_wt * sin_wt + inclined * inclined).sqrt()
    }

    /// Orbital phase folded into `(-0.5, 0.5]`, `t` seconds after mid-transit.
    pub fn orbital_phase(&self, t: f64) -> f64 {
        let phase = (t / self.period_seconds).fract();
        if phase > 0.5 {
            phase - 1.0
        } else if phase <= -0.5 {
            phase + 1.0
        } else {
            phase
        }
    }

    /// Geometric state at Julian date `jd`, gated by the eclipse window
    /// half-width `eclipse_window`.
    pub fn state_at(&self, jd: f64, eclipse_window: f64) -> TransitState {
        let t = self.seconds_since_epoch(jd);
        let separation = self.separation(t);
        let phase = self.orbital_phase(t);
        let regime = if phase.abs() < eclipse_window {
            Regime::classify(separation, self.radius_ratio)
        } else {
            Regime::OutOfEclipseWindow
        };
        TransitState {
            seconds_since_epoch: t,
            separation,
            phase,
            regime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn params() -> SystemParams {
        SystemParams::new(0.05, 1.0, 1.0, 4.0, 2_450_000.0, 90.0, LimbDarkening::uniform())
    }

    #[test]
    fn derived_quantities() {
        let g = DerivedGeometry::new(&params()).unwrap();
        assert_relative_eq!(g.radius_ratio(), R_JUP / R_SUN);
        assert_relative_eq!(g.normalized_distance(), 0.05 * AU / R_SUN);
        assert_relative_eq!(g.ang_freq(), 2.0 * PI / (4.0 * 86_400.0));
        assert_abs_diff_eq!(g.cos_i(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(g.omega(), 0.25);
        assert_eq!(g.coefficients(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn separation_at_epoch_is_impact_parameter() {
        let g = DerivedGeometry::new(&params().with_inclination(88.0)).unwrap();
        assert_relative_eq!(g.separation(0.0), g.impact_parameter(), epsilon = 1e-12);
    }

    #[test]
    fn separation_at_quadrature_is_full_distance() {
        let g = DerivedGeometry::new(&params().with_inclination(85.0)).unwrap();
        let quarter = 0.25 * 4.0 * 86_400.0;
        assert_relative_eq!(
            g.separation(quarter),
            g.normalized_distance(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn phase_folding() {
        let g = DerivedGeometry::new(&params()).unwrap();
        let period = 4.0 * 86_400.0;
        assert_abs_diff_eq!(g.orbital_phase(0.0), 0.0);
        assert_abs_diff_eq!(g.orbital_phase(0.1 * period), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(g.orbital_phase(-0.1 * period), -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(g.orbital_phase(0.75 * period), -0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(g.orbital_phase(-0.75 * period), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(g.orbital_phase(3.2 * period), 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(g.orbital_phase(0.5 * period), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g.orbital_phase(-0.5 * period), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn classify_regimes() {
        let p = 0.1;
        assert_eq!(Regime::classify(0.0, p), Regime::FullOverlap);
        assert_eq!(Regime::classify(0.9, p), Regime::FullOverlap);
        assert_eq!(Regime::classify(0.95, p), Regime::PartialOverlap);
        assert_eq!(Regime::classify(1.1, p), Regime::PartialOverlap);
        assert_eq!(Regime::classify(1.1 + 1e-9, p), Regime::NoOverlap);
    }

    #[test]
    fn state_gates_on_window() {
        let g = DerivedGeometry::new(&params()).unwrap();
        let s = g.state_at(2_450_000.0, 0.25);
        assert_eq!(s.regime, Regime::FullOverlap);
        assert_abs_diff_eq!(s.seconds_since_epoch, 0.0);

        // Half a period later the planet is behind the star.
        let s = g.state_at(2_450_002.0, 0.25);
        assert_eq!(s.regime, Regime::OutOfEclipseWindow);
        assert!(s.separation < 1.0, "z = {}", s.separation);
    }

    #[test]
    fn rejects_giant_planet() {
        let mut p = params();
        p.rp = 20.0;
        assert!(matches!(
            DerivedGeometry::new(&p),
            Err(LightCurveError::PlanetLargerThanStar { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_omega() {
        // c0 = 1 - 10 = -9 dominates: Omega = -9/4 + 10/8 < 0
        let limb = LimbDarkening::new(0.0, 0.0, 0.0, 10.0).unwrap();
        let p = params().with_limb(limb);
        assert!(matches!(
            DerivedGeometry::new(&p),
            Err(LightCurveError::InvalidParameter { name: "omega", .. })
        ));
    }
}
