//! Describe command: report the geometry derived from a system description.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use transit_lightcurve::{DerivedGeometry, SMALL_PLANET_LIMIT};

use crate::cli::DescribeArgs;
use crate::config::TransitConfig;
use crate::{config, convert};

/// Derived quantities of one system, as printed by `transit describe`.
#[derive(Debug, Serialize)]
pub struct Description {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submodel_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mstar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teff: Option<f64>,
    pub radius_ratio: f64,
    pub normalized_distance: f64,
    pub impact_parameter: f64,
    pub omega: f64,
    pub coefficients: [f64; 5],
    /// Orbital angular frequency (rad/s).
    pub ang_freq: f64,
    pub small_planet_approximation: bool,
}

/// Run the describe command.
pub fn run(args: DescribeArgs) -> Result<()> {
    let _cmd = info_span!("describe").entered();
    let config = config::load(&args.config)?;
    let description = describe(&config)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&description).context("failed to serialize JSON")?;
        println!("{json}");
    } else {
        print!("{description}");
    }
    Ok(())
}

/// Validates the configured system and collects its derived geometry.
pub fn describe(config: &TransitConfig) -> Result<Description> {
    let params = convert::build_system_params(&config.system, &config.limb_darkening)?;
    let geom = DerivedGeometry::new(&params).context("invalid system geometry")?;
    Ok(Description {
        name: config.system.name.clone(),
        id: config.system.id,
        submodel_id: config.system.submodel_id,
        mstar: config.system.mstar,
        teff: config.system.teff,
        radius_ratio: geom.radius_ratio(),
        normalized_distance: geom.normalized_distance(),
        impact_parameter: geom.impact_parameter(),
        omega: geom.omega(),
        coefficients: *geom.coefficients(),
        ang_freq: geom.ang_freq(),
        small_planet_approximation: geom.radius_ratio() <= SMALL_PLANET_LIMIT,
    })
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "name                 {name}")?;
        }
        if let Some(id) = self.id {
            writeln!(f, "id                   {id}")?;
        }
        if let Some(submodel_id) = self.submodel_id {
            writeln!(f, "submodel id          {submodel_id}")?;
        }
        if let Some(mstar) = self.mstar {
            writeln!(f, "stellar mass         {mstar} M_sun")?;
        }
        if let Some(teff) = self.teff {
            writeln!(f, "effective temp       {teff} K")?;
        }
        writeln!(f, "radius ratio p       {:.6}", self.radius_ratio)?;
        writeln!(f, "a / R*               {:.6}", self.normalized_distance)?;
        writeln!(f, "impact parameter b   {:.6}", self.impact_parameter)?;
        writeln!(f, "omega                {:.6}", self.omega)?;
        let coeffs: Vec<String> = self.coefficients.iter().map(|c| format!("{c:.6}")).collect();
        writeln!(f, "coefficients c0..c4  [{}]", coeffs.join(", "))?;
        writeln!(f, "angular frequency    {:.6e} rad/s", self.ang_freq)?;
        if !self.small_planet_approximation {
            writeln!(
                f,
                "note                 p > {SMALL_PLANET_LIMIT}: small-planet approximation is coarse"
            )?;
        }
        Ok(())
    }
}
