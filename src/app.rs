//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - resolves inputs (flags over `PQ_*` environment defaults)
//! - generates curves and prints tables/plots
//! - writes optional exports
//! - launches the TUI

use std::io::Write;

use clap::Parser;

use crate::cli::{Command, GenerateArgs, OutputFormat, PlotArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pq` binary.
pub fn run() -> Result<(), AppError> {
    // We want `pq` and `pq -p 120` to behave like `pq tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => handle_generate(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => {
            let input = args.resolve(crate::config::input_from_env()?);
            crate::tui::run(input)
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).try_init();
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let input = args.input.resolve(crate::config::input_from_env()?);
    let run = pipeline::recompute(input);
    let chart = &run.chart;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let write_err = |e: std::io::Error| AppError::config(format!("Failed to write output: {e}"));

    match args.format {
        OutputFormat::Table => {
            write!(out, "{}", crate::report::format_run_summary(chart)).map_err(write_err)?;
            writeln!(out).map_err(write_err)?;
            write!(out, "{}", crate::report::format_points_table(&chart.points)).map_err(write_err)?;
        }
        OutputFormat::Csv => {
            crate::io::write_points_csv(&mut out, &chart.points).map_err(write_err)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &crate::io::curve_file(chart))
                .map_err(|e| AppError::config(format!("Failed to write curve JSON: {e}")))?;
            writeln!(out).map_err(write_err)?;
        }
    }

    if args.plot {
        let plot = crate::plot::render_ascii_plot(chart, args.width, args.height);
        write!(out, "\n{plot}").map_err(write_err)?;
    }

    // Optional exports.
    if let Some(path) = &args.export_curve {
        crate::io::write_curve_json(path, chart)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_results_csv(path, &chart.points)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot(&curve.to_chart(), args.width, args.height);

    println!("{plot}");
    Ok(())
}

/// Rewrite argv so `pq` defaults to `pq tui`.
///
/// Rules:
/// - `pq`                      -> `pq tui`
/// - `pq -p 120 ...`           -> `pq tui -p 120 ...`
/// - `pq --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // Verbosity is global; keep it in front and look at what follows.
    if arg1 == "-v" || arg1 == "-vv" || arg1 == "--verbose" {
        let rest = rewrite_args(std::iter::once(argv[0].clone()).chain(argv[2..].iter().cloned()).collect());
        let mut out = vec![argv[0].clone(), arg1];
        out.extend(rest.into_iter().skip(1));
        return out;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["pq"])), argv(&["pq", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["pq", "-p", "50"])),
            argv(&["pq", "tui", "-p", "50"])
        );
        assert_eq!(
            rewrite_args(argv(&["pq", "-v", "--alloy", "zinc"])),
            argv(&["pq", "-v", "tui", "--alloy", "zinc"])
        );
        assert_eq!(rewrite_args(argv(&["pq", "-vv"])), argv(&["pq", "-vv", "tui"]));
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(
            rewrite_args(argv(&["pq", "generate", "-p", "50"])),
            argv(&["pq", "generate", "-p", "50"])
        );
        assert_eq!(rewrite_args(argv(&["pq", "--help"])), argv(&["pq", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["pq", "-v", "plot", "--curve", "c.json"])),
            argv(&["pq", "-v", "plot", "--curve", "c.json"])
        );
    }
}
