//! # transit-limb
//!
//! Nonlinear four-coefficient limb darkening for transit modelling.
//!
//! ## Pipeline
//!
//! ```text
//!  ┌────────────────┐     ┌──────────────────────┐     ┌─────────────────────┐
//!  │ LimbDarkening  │────▶│  RectangleIntegrator │────▶│ int I(r) 2r dr      │
//!  │ I(r), Omega    │     │  CumulativeIntensity │     │ over [rlow, rhigh]  │
//!  └────────────────┘     └──────────────────────┘     └─────────────────────┘
//! ```
//!
//! The disk-integrated intensity `int_0^1 I(r) 2r dr` equals `4 * Omega`, so
//! both integrators can be checked against [`LimbDarkening::omega`].
//!
//! ## Quick start
//!
//! ```rust
//! use transit_limb::{CumulativeIntensity, DEFAULT_STEP, LimbDarkening, RectangleIntegrator};
//!
//! let law = LimbDarkening::new(0.5, -0.1, 0.4, -0.2).unwrap();
//! let direct = RectangleIntegrator::new(law, DEFAULT_STEP).unwrap();
//! let table = CumulativeIntensity::new(&law, DEFAULT_STEP).unwrap();
//!
//! let a = direct.integrate(0.2, 0.4).unwrap();
//! let b = table.integrate(0.2, 0.4).unwrap();
//! assert!((a - b).abs() < 1e-3);
//! ```

pub mod error;
pub mod integrate;
pub mod law;
pub mod table;

pub use error::LimbError;
pub use integrate::{
    DEFAULT_STEP, MAX_STEP, MIN_STEP, RectangleIntegrator, integrated_intensity, validate_step,
};
pub use law::{LimbDarkening, N_COEFFS};
pub use table::CumulativeIntensity;
