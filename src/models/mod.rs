//! Shared data models for rule evaluation and report output.
//!
//! A check produces `Violation`s, collected into one `RuleResult` per rule
//! id. Severity drives pass/fail accounting: only `Must` flips the process
//! exit code.

use serde::Serialize;
use std::fmt;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[serde(rename_all = "UPPERCASE")]
/// Mandatory-ness tier of a violation, ordered by severity.
pub enum Severity {
    Must,
    Should,
    May,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Must => write!(f, "MUST"),
            Severity::Should => write!(f, "SHOULD"),
            Severity::May => write!(f, "MAY"),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
/// One detected instance of non-compliance. Immutable once built.
pub struct Violation {
    pub rule_id: String,
    pub severity: Severity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    /// Violation with neither location nor remediation hint.
    pub fn new(rule_id: &str, severity: Severity, description: &str) -> Self {
        Violation {
            rule_id: rule_id.to_string(),
            severity,
            description: description.to_string(),
            file_path: None,
            line_number: None,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_file(mut self, file_path: &str) -> Self {
        self.file_path = Some(file_path.to_string());
        self
    }

    pub fn with_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

/// Pass/fail policy applied when a check folds its violations into a result.
///
/// Most rules fail on any violation; a few tolerate SHOULD-level findings
/// and fail only on MUST. The choice is fixed per rule id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PassPolicy {
    AllViolations,
    MustOnly,
}

#[derive(Serialize, Clone, Debug)]
/// Aggregated outcome of one rule check.
pub struct RuleResult {
    pub rule_id: String,
    pub passed: bool,
    pub violations: Vec<Violation>,
    pub details: String,
}

impl RuleResult {
    /// Fold violations into a result under the given pass policy.
    pub fn from_violations(
        rule_id: &str,
        policy: PassPolicy,
        violations: Vec<Violation>,
        details: String,
    ) -> Self {
        let passed = match policy {
            PassPolicy::AllViolations => violations.is_empty(),
            PassPolicy::MustOnly => !violations.iter().any(|v| v.severity == Severity::Must),
        };
        RuleResult {
            rule_id: rule_id.to_string(),
            passed,
            violations,
            details,
        }
    }

    pub fn must_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Must)
            .count()
    }
}
