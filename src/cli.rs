use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Synthetic transit light-curve generator.
#[derive(Parser)]
#[command(
    name = "transit",
    version,
    about = "Synthetic limb-darkened transit light curves"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the relative flux at a set of Julian dates.
    Generate(GenerateArgs),
    /// Print the geometry derived from a system description.
    Describe(DescribeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML system description.
    #[arg(short, long, default_value = "system.toml")]
    pub config: PathBuf,

    /// File with one Julian date per line (`#` starts a comment).
    #[arg(short, long, conflicts_with_all = ["start", "end", "samples"])]
    pub times: Option<PathBuf>,

    /// First Julian date of an evenly spaced grid.
    #[arg(long, requires_all = ["end", "samples"])]
    pub start: Option<f64>,

    /// Last Julian date of an evenly spaced grid.
    #[arg(long, requires_all = ["start", "samples"])]
    pub end: Option<f64>,

    /// Number of grid points.
    #[arg(long, requires_all = ["start", "end"])]
    pub samples: Option<usize>,

    /// Output CSV path; stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the integration method from config (`direct` or `table`).
    #[arg(short, long)]
    pub method: Option<String>,

    /// Evaluate timestamps in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(clap::Args)]
pub struct DescribeArgs {
    /// Path to TOML system description.
    #[arg(short, long, default_value = "system.toml")]
    pub config: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_grid_arguments() {
        let cli = Cli::try_parse_from([
            "transit", "-vv", "generate", "--config", "hd209458.toml", "--start", "2452826.5",
            "--end", "2452826.8", "--samples", "100", "--method", "table", "--parallel",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.samples, Some(100));
        assert_eq!(args.method.as_deref(), Some("table"));
        assert!(args.parallel);
        assert!(args.times.is_none());
    }

    #[test]
    fn times_conflicts_with_grid() {
        let result = Cli::try_parse_from([
            "transit", "generate", "--times", "jd.txt", "--start", "1.0", "--end", "2.0",
            "--samples", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn incomplete_grid_is_rejected() {
        let result = Cli::try_parse_from(["transit", "generate", "--start", "1.0"]);
        assert!(result.is_err());
    }

    #[test]
    fn describe_defaults() {
        let cli = Cli::try_parse_from(["transit", "describe"]).unwrap();
        let Command::Describe(args) = cli.command else {
            panic!("expected describe");
        };
        assert_eq!(args.config, PathBuf::from("system.toml"));
        assert!(!args.json);
    }
}
