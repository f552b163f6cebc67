//! Command-line parsing for the PQ curve tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the curve math.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::domain::{AlloyType, SampleInput};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pq", version, about = "Die-casting PQ curve generator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a curve and print it (table, CSV or JSON), optionally plot/export.
    Generate(GenerateArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// Sliders and the alloy selector start from the given inputs (or the
    /// `PQ_*` environment defaults).
    Tui(InputArgs),
}

/// The four curve inputs. Unset flags fall back to configured defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// Injection pressure ceiling.
    #[arg(short = 'p', long)]
    pub pressure: Option<f64>,

    /// Injection speed (flow scale factor).
    #[arg(short = 's', long)]
    pub speed: Option<f64>,

    /// Die surface temperature.
    #[arg(short = 't', long = "die-temp", allow_negative_numbers = true)]
    pub die_temp: Option<f64>,

    /// Alloy type (aluminum, zinc; anything else means no adjustment).
    #[arg(short = 'a', long)]
    pub alloy: Option<AlloyType>,
}

impl InputArgs {
    /// Overlay the flags that were given onto `defaults`.
    pub fn resolve(&self, defaults: SampleInput) -> SampleInput {
        SampleInput {
            pressure: self.pressure.unwrap_or(defaults.pressure),
            speed: self.speed.unwrap_or(defaults.speed),
            die_temp: self.die_temp.unwrap_or(defaults.die_temp),
            alloy: self.alloy.unwrap_or(defaults.alloy),
        }
    }
}

/// Output format for `pq generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Options for generating a curve.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How to print the points.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Render an ASCII plot after the table.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export curve (inputs + bounds + points) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,

    /// Export points to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Curve JSON file produced by `pq generate --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "pq", "generate", "-p", "120", "--speed", "3", "--die-temp", "-10", "--alloy", "zinc",
            "--format", "csv",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, OutputFormat::Csv);
        let input = args.input.resolve(crate::config::default_input());
        assert_eq!(input, SampleInput::new(120.0, 3.0, -10.0, AlloyType::Zinc));
    }

    #[test]
    fn unknown_alloy_becomes_other() {
        let cli = Cli::try_parse_from(["pq", "tui", "--alloy", "magnesium"]).unwrap();
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.alloy, Some(AlloyType::Other));
    }

    #[test]
    fn non_numeric_pressure_is_rejected() {
        assert!(Cli::try_parse_from(["pq", "generate", "--pressure", "high"]).is_err());
    }

    #[test]
    fn non_finite_flags_reach_the_generator() {
        let cli = Cli::try_parse_from(["pq", "generate", "--speed", "NaN", "--pressure", "inf"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.input.speed.is_some_and(f64::is_nan));
        assert_eq!(args.input.pressure, Some(f64::INFINITY));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["pq", "-vv", "plot", "--curve", "c.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
