//! # transit-lightcurve
//!
//! Synthetic light curves for a planet on a circular orbit transiting a
//! limb-darkened star, using the small-planet approximation of
//! Mandel & Agol (2002, ApJ 580, L171).
//!
//! ## Per-timestamp pipeline
//!
//! ```text
//!  jd ──▶ t = (jd - epoch) * 86400 ──▶ z(t), phase(t)
//!                                        │
//!          |phase| >= window ──────────▶ F = 1
//!          z > 1 + p ──────────────────▶ F = 1
//!          1 - p < z <= 1 + p ─────────▶ F = 1 - I*(z) [p^2 acos((z-1)/p) - (z-1) sqrt(p^2-(z-1)^2)] / (4 pi Omega)
//!          z <= 1 - p ─────────────────▶ F = 1 - p^2 I*(z) / (4 Omega)
//! ```
//!
//! `I*(z)` is the area-weighted mean intensity over the radii covered by
//! the planet, computed by the integrators in `transit-limb`.
//!
//! ## Quick start
//!
//! ```rust
//! use transit_limb::LimbDarkening;
//! use transit_lightcurve::{SystemParams, generate_synthetic};
//!
//! let limb = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
//! let params = SystemParams::new(0.0475, 1.155, 1.359, 3.5247, 2_452_826.6285, 86.7, limb);
//!
//! let jd: Vec<f64> = (0..100).map(|k| 2_452_826.5 + k as f64 * 0.003).collect();
//! let flux = generate_synthetic(&jd, &params).unwrap();
//! assert_eq!(flux.len(), jd.len());
//! ```

pub mod clamp;
pub mod config;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod params;

pub use clamp::{Bounded, acos_clamped, sqrt_clamped};
pub use config::{ECLIPSE_WINDOW_HALF_WIDTH, IntegrationMethod, LightCurveConfig};
pub use error::LightCurveError;
pub use generate::{
    FluxModel, generate_synthetic, generate_synthetic_into, generate_synthetic_with,
};
pub use geometry::{DerivedGeometry, Regime, SMALL_PLANET_LIMIT, TransitState};
pub use params::SystemParams;
