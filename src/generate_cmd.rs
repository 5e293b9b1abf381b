//! Generate command: compute a light curve and write it as CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use transit_lightcurve::generate_synthetic_with;

use crate::cli::GenerateArgs;
use crate::{config, convert, times};

/// Run the light-curve generation.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = config::load(&args.config)?;

    let params = convert::build_system_params(&config.system, &config.limb_darkening)?;
    let lc_cfg =
        convert::build_lightcurve_config(&config.model, args.method.as_deref(), args.parallel)?;

    let jd = resolve_times(&args)?;
    info!(
        n = jd.len(),
        method = ?lc_cfg.method(),
        parallel = lc_cfg.parallel(),
        "computing light curve"
    );

    let flux = generate_synthetic_with(&jd, &params, &lc_cfg)
        .context("light-curve generation failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            write_csv(BufWriter::new(file), &jd, &flux)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "light curve written");
        }
        None => {
            let stdout = io::stdout();
            write_csv(stdout.lock(), &jd, &flux).context("failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Timestamps from `--times`, or the `--start/--end/--samples` grid.
fn resolve_times(args: &GenerateArgs) -> Result<Vec<f64>> {
    match (&args.times, args.start, args.end, args.samples) {
        (Some(path), None, None, None) => times::read_times(path),
        (None, Some(start), Some(end), Some(samples)) => times::time_grid(start, end, samples),
        _ => bail!("give either --times FILE or all of --start, --end and --samples"),
    }
}

/// Writes a `jd,flux` header followed by one row per timestamp.
fn write_csv<W: Write>(mut w: W, jd: &[f64], flux: &[f64]) -> io::Result<()> {
    writeln!(w, "jd,flux")?;
    for (t, f) in jd.iter().zip(flux) {
        writeln!(w, "{t},{f}")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    const SYSTEM: &str = r#"
        [system]
        name = "HD 209458 b"
        a = 0.04747
        rs = 1.155
        rp = 1.359
        period = 3.52474859
        epoch = 2452826.628521
        i = 86.71

        [limb_darkening]
        coefficients = [0.34, 0.76, -0.71, 0.25]
    "#;

    fn write_config(dir: &Path) -> PathBuf {
        let path = dir.join("system.toml");
        std::fs::write(&path, SYSTEM).unwrap();
        path
    }

    fn args(config: PathBuf) -> GenerateArgs {
        GenerateArgs {
            config,
            times: None,
            start: None,
            end: None,
            samples: None,
            output: None,
            method: None,
            parallel: false,
        }
    }

    fn read_csv(path: &Path) -> Vec<(f64, f64)> {
        let text = std::fs::read_to_string(path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("jd,flux"));
        lines
            .map(|l| {
                let (t, f) = l.split_once(',').unwrap();
                (t.parse().unwrap(), f.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn grid_to_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("lc.csv");
        let mut a = args(write_config(dir.path()));
        a.start = Some(2_452_826.528_521);
        a.end = Some(2_452_826.728_521);
        a.samples = Some(101);
        a.output = Some(output.clone());
        run(a).unwrap();

        let rows = read_csv(&output);
        assert_eq!(rows.len(), 101);
        assert_eq!(rows[0].1, 1.0);
        assert_eq!(rows[100].1, 1.0);
        assert!(rows[50].1 < 0.99, "mid-transit flux {}", rows[50].1);
    }

    #[test]
    fn times_file_preserves_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let times = dir.path().join("jd.txt");
        std::fs::write(
            &times,
            "# unsorted\n2452826.628521\n2452825.0\n\n2452826.60\n",
        )
        .unwrap();
        let output = dir.path().join("lc.csv");
        let mut a = args(write_config(dir.path()));
        a.times = Some(times);
        a.output = Some(output.clone());
        a.method = Some("table".to_string());
        a.parallel = true;
        run(a).unwrap();

        let rows = read_csv(&output);
        let jd: Vec<f64> = rows.iter().map(|r| r.0).collect();
        assert_eq!(jd, vec![2_452_826.628_521, 2_452_825.0, 2_452_826.60]);
        assert!(rows[0].1 < 0.99);
        assert_eq!(rows[1].1, 1.0);
        assert!(rows[2].1 < 1.0);
    }

    #[test]
    fn missing_times_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = run(args(write_config(dir.path()))).unwrap_err().to_string();
        assert!(err.contains("--times"), "{err}");
    }

    #[test]
    fn unknown_method_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut a = args(write_config(dir.path()));
        a.start = Some(2_452_826.5);
        a.end = Some(2_452_826.7);
        a.samples = Some(3);
        a.method = Some("simpson".to_string());
        assert!(run(a).is_err());
    }

    #[test]
    fn csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[1.5, 2.0], &[1.0, 0.25]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "jd,flux\n1.5,1\n2,0.25\n");
    }
}
