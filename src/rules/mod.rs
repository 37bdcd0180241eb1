//! The rule catalogue: one check per rule id, in a fixed declaration order.
//!
//! A check is a pure function of the project root. It returns the violations
//! it detected; the surrounding [`Check`] descriptor carries the rule id,
//! the details label, and the pass policy used to fold violations into a
//! [`RuleResult`](crate::models::RuleResult).
//!
//! A number of rule ids are registered as placeholders: they inspect nothing
//! and always pass. They keep the identifier space complete so reports cover
//! every catalogue entry.

pub mod api;
pub mod cicd;
pub mod config;
pub mod foundation;
pub mod observability;
pub mod security;
pub mod service;
pub mod testing;

use crate::models::{PassPolicy, RuleResult, Violation};
use std::path::Path;

/// Descriptor for one registered rule check.
pub struct Check {
    pub id: &'static str,
    /// Label used in the result's details line.
    pub label: &'static str,
    pub policy: PassPolicy,
    pub eval: fn(&Path) -> Vec<Violation>,
}

impl Check {
    /// Evaluate this check against `root`, folding violations per policy.
    pub fn run(&self, root: &Path) -> RuleResult {
        let violations = (self.eval)(root);
        let details = format!("{}: {} violations found", self.label, violations.len());
        RuleResult::from_violations(self.id, self.policy, violations, details)
    }
}

fn no_inspection(_root: &Path) -> Vec<Violation> {
    Vec::new()
}

const fn placeholder(id: &'static str, label: &'static str) -> Check {
    Check {
        id,
        label,
        policy: PassPolicy::AllViolations,
        eval: no_inspection,
    }
}

const fn active(
    id: &'static str,
    label: &'static str,
    policy: PassPolicy,
    eval: fn(&Path) -> Vec<Violation>,
) -> Check {
    Check {
        id,
        label,
        policy,
        eval,
    }
}

/// The full catalogue in declaration order. Rule ids are unique; reports
/// carry exactly one entry per id.
pub fn registry() -> Vec<Check> {
    use PassPolicy::{AllViolations, MustOnly};
    vec![
        // Foundation (01A-01C)
        active(
            "01A",
            "Design principles compliance",
            AllViolations,
            foundation::design_principles,
        ),
        active(
            "01B",
            "Runtime operations compliance",
            AllViolations,
            foundation::runtime_operations,
        ),
        placeholder("01C", "Governance principles compliance"),
        // Service architecture (02A-02C)
        active(
            "02A",
            "Container design compliance",
            MustOnly,
            service::container_design,
        ),
        placeholder("02B", "Network topology compliance"),
        placeholder("02C", "Service metadata compliance"),
        // Security (03A-03C)
        active(
            "03A",
            "Authentication compliance",
            MustOnly,
            security::authentication,
        ),
        placeholder("03B", "Authorization compliance"),
        placeholder("03C", "Security encryption compliance"),
        // Database (04A-04B)
        placeholder("04A", "Database design compliance"),
        placeholder("04B", "Database operations compliance"),
        // Configuration (05A-05B)
        placeholder("05A", "Environment config compliance"),
        active(
            "05B",
            "Secrets management compliance",
            AllViolations,
            config::secrets_management,
        ),
        // API design (06A-06C)
        active("06A", "API design compliance", AllViolations, api::api_design),
        placeholder("06B", "API documentation compliance"),
        placeholder("06C", "API versioning compliance"),
        // Testing (07A-07C)
        active(
            "07A",
            "Testing strategy compliance",
            AllViolations,
            testing::testing_strategy,
        ),
        placeholder("07B", "Test implementation compliance"),
        placeholder("07C", "Test automation compliance"),
        // Observability (08A-08C)
        placeholder("08A", "Error handling compliance"),
        active(
            "08B",
            "Logging standards compliance",
            MustOnly,
            observability::logging_standards,
        ),
        placeholder("08C", "Monitoring compliance"),
        // CI/CD (09A)
        active(
            "09A",
            "CI/CD pipeline compliance",
            MustOnly,
            cicd::pipelines,
        ),
    ]
}
