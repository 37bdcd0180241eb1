//! Foundation rules: design principles (01A) and runtime operations (01B).

use crate::models::{Severity, Violation};
use crate::scan;
use std::path::Path;

/// 01A: design & architecture principles.
///
/// Requires an OpenAPI specification somewhere in the tree, a performance
/// budget at the root, and an ADR directory.
pub fn design_principles(root: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();

    let openapi = scan::enumerate(root, &["openapi.yaml", "openapi.yml", "swagger.yaml"]);
    if openapi.is_empty() {
        violations.push(
            Violation::new("01A-001", Severity::Must, "Missing OpenAPI specification file")
                .with_suggestion("Create docs/openapi.yaml with API specification"),
        );
    }

    if !root.join("perf-budget.yaml").exists() {
        violations.push(
            Violation::new(
                "01A-002",
                Severity::Must,
                "Missing performance budget configuration",
            )
            .with_file("perf-budget.yaml")
            .with_suggestion("Create perf-budget.yaml with SLO targets"),
        );
    }

    if !root.join("docs").join("adr").exists() {
        violations.push(
            Violation::new(
                "01A-003",
                Severity::Must,
                "Missing Architecture Decision Records directory",
            )
            .with_file("docs/adr/")
            .with_suggestion("Create docs/adr/ directory with CAP theorem analysis"),
        );
    }

    violations
}

const HEALTH_PATHS: [&str; 3] = ["/health", "/healthz", "/ready"];

/// 01B: runtime operations. At least one config or source file must mention
/// a health endpoint path.
pub fn runtime_operations(root: &Path) -> Vec<Violation> {
    let found = scan::find_first(
        root,
        &["*.yaml", "*.yml", "*.json", "*.py", "*.js", "*.ts"],
        |content| HEALTH_PATHS.iter().any(|hp| content.contains(hp)),
    );

    if found.is_none() {
        vec![
            Violation::new("01B-001", Severity::Must, "No health check endpoints found")
                .with_suggestion("Implement /health and /ready endpoints"),
        ]
    } else {
        Vec::new()
    }
}
