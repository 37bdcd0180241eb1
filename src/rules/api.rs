//! API design rules: versioned endpoints (06A).

use crate::models::{Severity, Violation};
use crate::scan;
use regex::Regex;
use std::path::Path;

/// 06A: API design. At least one source file must contain a versioned
/// endpoint path such as `/v1/` or `/v2/`; existence semantics.
pub fn api_design(root: &Path) -> Vec<Violation> {
    let versioned = match Regex::new(r"/v\d+/") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let found = scan::find_first(
        root,
        &["*.py", "*.js", "*.ts", "*.go", "*.java"],
        |content| versioned.is_match(content),
    );

    if found.is_none() {
        vec![
            Violation::new("06A-001", Severity::Must, "No versioned API endpoints found")
                .with_suggestion("Implement versioned endpoints (e.g., /v1/users, /v2/orders)"),
        ]
    } else {
        Vec::new()
    }
}
