//! Runs the full rule catalogue against a project root.
//!
//! Checks are independent pure functions of the root path, so they are
//! evaluated in parallel and collected at a single aggregation point. The
//! result map is keyed by rule id and ordered, which keeps downstream
//! rendering deterministic.

use crate::models::RuleResult;
use crate::rules;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Evaluate every registered check exactly once. The returned map holds one
/// entry per catalogue id.
pub fn run_all(root: &Path) -> BTreeMap<String, RuleResult> {
    rules::registry()
        .par_iter()
        .map(|check| (check.id.to_string(), check.run(root)))
        .collect()
}

/// Total MUST violations across all results; drives the process exit code.
pub fn must_violation_count(results: &BTreeMap<String, RuleResult>) -> usize {
    results.values().map(|r| r.must_count()).sum()
}
