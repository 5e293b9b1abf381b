//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use transit_limb::LimbDarkening;
use transit_lightcurve::{IntegrationMethod, LightCurveConfig, SystemParams};

/// Parses an integration method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<IntegrationMethod> {
    match s.to_lowercase().as_str() {
        "direct" => Ok(IntegrationMethod::Direct),
        "table" => Ok(IntegrationMethod::Table),
        other => bail!("unknown integration method: {other:?}"),
    }
}

/// Converts the TOML limb-darkening table into a [`LimbDarkening`] law.
///
/// Exactly one of the `c1..c4` keys or `coefficients` must be used.
pub fn build_limb(limb: &LimbToml) -> Result<LimbDarkening> {
    let named = [limb.c1, limb.c2, limb.c3, limb.c4];
    let any_named = named.iter().any(Option::is_some);
    match (&limb.coefficients, any_named) {
        (Some(coeffs), false) => {
            LimbDarkening::from_slice(coeffs).context("invalid limb_darkening.coefficients")
        }
        (None, true) => match named {
            [Some(c1), Some(c2), Some(c3), Some(c4)] => {
                LimbDarkening::new(c1, c2, c3, c4).context("invalid limb-darkening coefficients")
            }
            _ => bail!("limb_darkening needs all four of c1, c2, c3, c4"),
        },
        (Some(_), true) => {
            bail!("limb_darkening must have exactly one of c1..c4 or coefficients, got both")
        }
        (None, false) => {
            bail!("limb_darkening must have exactly one of c1..c4 or coefficients, got neither")
        }
    }
}

/// Builds [`SystemParams`] from the TOML system and limb-darkening tables.
pub fn build_system_params(system: &SystemToml, limb: &LimbToml) -> Result<SystemParams> {
    let limb = build_limb(limb)?;
    let params = SystemParams::new(
        system.a,
        system.rs,
        system.rp,
        system.period,
        system.epoch,
        system.inclination,
        limb,
    );
    params.validate().context("invalid [system] parameters")?;
    Ok(params)
}

/// Builds a [`LightCurveConfig`] from the TOML model table.
///
/// A `method` given on the command line replaces the configured one, and
/// `parallel` set on the command line enables parallel evaluation.
pub fn build_lightcurve_config(
    model: &ModelToml,
    method: Option<&str>,
    parallel: bool,
) -> Result<LightCurveConfig> {
    let method = parse_method(method.unwrap_or(&model.method))?;
    let cfg = LightCurveConfig::new()
        .with_step(model.step)
        .with_eclipse_window(model.eclipse_window)
        .with_method(method)
        .with_parallel(model.parallel || parallel);
    cfg.validate().context("invalid [model] settings")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SystemToml {
        SystemToml {
            a: 0.047_47,
            rs: 1.155,
            rp: 1.359,
            period: 3.524_748_59,
            epoch: 2_452_826.628_521,
            inclination: 86.71,
            name: None,
            id: None,
            submodel_id: None,
            mstar: None,
            teff: None,
        }
    }

    fn named(c: [f64; 4]) -> LimbToml {
        LimbToml {
            c1: Some(c[0]),
            c2: Some(c[1]),
            c3: Some(c[2]),
            c4: Some(c[3]),
            coefficients: None,
        }
    }

    fn listed(c: Vec<f64>) -> LimbToml {
        LimbToml {
            c1: None,
            c2: None,
            c3: None,
            c4: None,
            coefficients: Some(c),
        }
    }

    #[test]
    fn method_names() {
        assert_eq!(parse_method("direct").unwrap(), IntegrationMethod::Direct);
        assert_eq!(parse_method("TABLE").unwrap(), IntegrationMethod::Table);
        assert!(parse_method("simpson").is_err());
    }

    #[test]
    fn limb_forms_agree() {
        let a = build_limb(&named([0.34, 0.76, -0.71, 0.25])).unwrap();
        let b = build_limb(&listed(vec![0.34, 0.76, -0.71, 0.25])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn limb_form_errors() {
        let mut both = named([0.1, 0.2, 0.3, 0.4]);
        both.coefficients = Some(vec![0.1, 0.2, 0.3, 0.4]);
        let err = build_limb(&both).unwrap_err().to_string();
        assert!(err.contains("got both"), "{err}");

        let mut neither = listed(vec![]);
        neither.coefficients = None;
        let err = build_limb(&neither).unwrap_err().to_string();
        assert!(err.contains("got neither"), "{err}");

        let mut partial = named([0.1, 0.2, 0.3, 0.4]);
        partial.c4 = None;
        assert!(build_limb(&partial).is_err());

        assert!(build_limb(&listed(vec![0.1, 0.2, 0.3])).is_err());
    }

    #[test]
    fn system_params_are_validated() {
        let params = build_system_params(&system(), &named([0.34, 0.76, -0.71, 0.25])).unwrap();
        assert!((params.inclination - 86.71).abs() < f64::EPSILON);

        let mut bad = system();
        bad.period = -1.0;
        assert!(build_system_params(&bad, &named([0.0; 4])).is_err());
    }

    #[test]
    fn lightcurve_config_overrides() {
        let model = ModelToml::default();
        let cfg = build_lightcurve_config(&model, None, false).unwrap();
        assert_eq!(cfg.method(), IntegrationMethod::Direct);
        assert!(!cfg.parallel());

        let cfg = build_lightcurve_config(&model, Some("table"), true).unwrap();
        assert_eq!(cfg.method(), IntegrationMethod::Table);
        assert!(cfg.parallel());

        let bad = ModelToml {
            eclipse_window: 0.9,
            ..ModelToml::default()
        };
        assert!(build_lightcurve_config(&bad, None, false).is_err());
    }
}
