use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level system description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitConfig {
    /// Orbital, stellar and planetary parameters.
    pub system: SystemToml,

    /// Nonlinear limb-darkening coefficients.
    pub limb_darkening: LimbToml,

    /// Numerical model settings.
    #[serde(default)]
    pub model: ModelToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemToml {
    /// Semi-major axis (AU).
    pub a: f64,
    /// Stellar radius (solar radii).
    pub rs: f64,
    /// Planetary radius (Jupiter radii).
    pub rp: f64,
    /// Orbital period (days).
    pub period: f64,
    /// Julian date of mid-transit.
    pub epoch: f64,
    /// Orbital inclination (degrees).
    #[serde(alias = "i")]
    pub inclination: f64,

    // Catalogue metadata, reported but not used by the model.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    /// Variant of the catalogue entry this parameter set describes.
    #[serde(default)]
    pub submodel_id: Option<u64>,
    /// Stellar mass (solar masses).
    #[serde(default)]
    pub mstar: Option<f64>,
    /// Stellar effective temperature (K).
    #[serde(default)]
    pub teff: Option<f64>,
}

/// Limb-darkening coefficients: either `c1..c4` or a `coefficients` list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimbToml {
    pub c1: Option<f64>,
    pub c2: Option<f64>,
    pub c3: Option<f64>,
    pub c4: Option<f64>,
    pub coefficients: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_eclipse_window")]
    pub eclipse_window: f64,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            step: default_step(),
            eclipse_window: default_eclipse_window(),
            method: default_method(),
            parallel: false,
        }
    }
}

fn default_step() -> f64 {
    transit_limb::DEFAULT_STEP
}
fn default_eclipse_window() -> f64 {
    transit_lightcurve::ECLIPSE_WINDOW_HALF_WIDTH
}
fn default_method() -> String {
    "direct".to_string()
}

/// Reads and parses a TOML system description.
pub fn load(path: &Path) -> Result<TransitConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
