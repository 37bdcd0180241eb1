//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "regula",
    version,
    about = "Check a project tree against the organizational rule catalogue",
    long_about = "Regula — scan a project directory against a fixed catalogue of compliance rules (required files, CI pipelines, hardcoded secrets, ...) and emit a pass/fail report.\n\nConfiguration precedence: CLI > regula.toml > defaults.",
    after_help = "Examples:\n  regula\n  regula ./services/billing\n  regula . compliance-report.md\n  regula --output json\n\nExit codes:\n  0  no MUST violations\n  1  at least one MUST violation\n  2  invocation error (bad root, unwritable report)"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Project root to scan (default: current dir)
    #[arg(default_value = ".")]
    pub project_root: String,

    /// Write the report to this file instead of stdout
    pub output_file: Option<String>,

    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
