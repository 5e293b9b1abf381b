//! Observation timestamps: text files of Julian dates and evenly spaced grids.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Parses one Julian date per line.
///
/// Blank lines are skipped and `#` starts a comment that runs to the end of
/// the line.
pub fn parse_times(text: &str) -> Result<Vec<f64>> {
    let mut jd = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let value: f64 = content
            .parse()
            .with_context(|| format!("line {}: not a Julian date: {content:?}", lineno + 1))?;
        if !value.is_finite() {
            bail!("line {}: Julian date must be finite, got {value}", lineno + 1);
        }
        jd.push(value);
    }
    Ok(jd)
}

/// Reads Julian dates from a file, see [`parse_times`].
pub fn read_times(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read times file: {}", path.display()))?;
    parse_times(&text).with_context(|| format!("failed to parse times file: {}", path.display()))
}

/// `samples` evenly spaced Julian dates from `start` to `end` inclusive.
pub fn time_grid(start: f64, end: f64, samples: usize) -> Result<Vec<f64>> {
    if !start.is_finite() || !end.is_finite() {
        bail!("grid bounds must be finite, got start={start}, end={end}");
    }
    if end < start {
        bail!("grid end ({end}) is before start ({start})");
    }
    match samples {
        0 => bail!("grid needs at least one sample"),
        1 => Ok(vec![start]),
        n => {
            let dt = (end - start) / (n - 1) as f64;
            Ok((0..n).map(|k| start + dt * k as f64).collect())
        }
    }
}
