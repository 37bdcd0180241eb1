//! Output handling for compliance runs.
//!
//! Supports `human` (the Markdown report, default) and `json` outputs. The
//! JSON form carries the per-rule results map plus the summary block. Either
//! form can be printed to stdout or written to a report file; writing prints
//! a confirmation line to stdout.

use crate::models::RuleResult;
use crate::report;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Render results in the requested output mode. Unknown modes fall back to
/// `human`.
pub fn render(results: &BTreeMap<String, RuleResult>, output: &str) -> String {
    match output {
        "json" => {
            let mut s = serde_json::to_string_pretty(&compose_json(results))
                .unwrap_or_else(|_| "{}".to_string());
            s.push('\n');
            s
        }
        _ => report::render(results),
    }
}

/// Print the rendered report to stdout, or write it to `report_file` and
/// print a confirmation line instead.
pub fn emit(rendered: &str, report_file: Option<&Path>) -> io::Result<()> {
    match report_file {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("Compliance report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_json(results: &BTreeMap<String, RuleResult>) -> JsonVal {
    let summary = report::summarize(results);
    json!({
        "results": results,
        "summary": summary,
    })
}
