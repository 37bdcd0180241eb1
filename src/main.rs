//! Regula CLI binary entry point.
//! Runs the rule catalogue against a project root and prints the report.

mod cli;
mod config;
mod models;
mod output;
mod report;
mod rules;
mod runner;
mod scan;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        &cli.project_root,
        cli.output_file.as_deref(),
        cli.output.as_deref(),
    );

    if !eff.project_root.is_dir() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!(
                "project root is not a directory: {}",
                eff.project_root.display()
            )
        );
        std::process::exit(2);
    }

    let results = runner::run_all(&eff.project_root);
    let rendered = output::render(&results, &eff.output);

    if let Err(e) = output::emit(&rendered, eff.report_file.as_deref()) {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("failed to write report: {}", e)
        );
        std::process::exit(2);
    }

    if runner::must_violation_count(&results) > 0 {
        std::process::exit(1);
    }
}
