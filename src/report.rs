//! Report rendering: summary arithmetic plus the fixed Markdown template.
//!
//! The report is recomputed on every run and never persisted by this module;
//! rendering is a pure function of the results map so repeated runs over an
//! unchanged tree yield byte-identical output.

use crate::models::{RuleResult, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Serialize, Clone, Debug)]
/// Headline numbers for a compliance run.
pub struct Summary {
    pub total_rules: usize,
    pub rules_passed: usize,
    pub rules_failed: usize,
    pub total_violations: usize,
    pub must_violations: usize,
    /// Percentage of rules passed, one decimal place.
    pub compliance_score: f64,
}

/// Compute the summary block numbers from a results map.
pub fn summarize(results: &BTreeMap<String, RuleResult>) -> Summary {
    let total_rules = results.len();
    let rules_passed = results.values().filter(|r| r.passed).count();
    let total_violations = results.values().map(|r| r.violations.len()).sum();
    let must_violations = results
        .values()
        .flat_map(|r| &r.violations)
        .filter(|v| v.severity == Severity::Must)
        .count();
    let compliance_score = if total_rules == 0 {
        0.0
    } else {
        rules_passed as f64 / total_rules as f64 * 100.0
    };
    Summary {
        total_rules,
        rules_passed,
        rules_failed: total_rules - rules_passed,
        total_violations,
        must_violations,
        compliance_score,
    }
}

/// Render the full Markdown compliance report. Detail blocks are ordered by
/// rule id; the three closing recommendations are independent conditions and
/// more than one may appear.
pub fn render(results: &BTreeMap<String, RuleResult>) -> String {
    let s = summarize(results);

    let mut report = format!(
        "\n# Universal Rules Compliance Report\n\n\
         ## Summary\n\
         - **Total Rules Tested**: {}\n\
         - **Rules Passed**: {}\n\
         - **Rules Failed**: {}\n\
         - **Total Violations**: {}\n\
         - **MUST Violations**: {}\n\
         - **Compliance Score**: {:.1}%\n\n\
         ## Detailed Results\n\n",
        s.total_rules,
        s.rules_passed,
        s.rules_failed,
        s.total_violations,
        s.must_violations,
        s.compliance_score
    );

    // BTreeMap iteration is already ascending by rule id.
    for (rule_id, result) in results {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        let _ = writeln!(report, "### {}: {}", rule_id, status);
        let _ = writeln!(report, "{}\n", result.details);

        if !result.violations.is_empty() {
            report.push_str("**Violations:**\n");
            for violation in &result.violations {
                let _ = write!(report, "- [{}] {}", violation.severity, violation.description);
                if let Some(file) = &violation.file_path {
                    let _ = write!(report, " ({}", file);
                    if let Some(line) = violation.line_number {
                        let _ = write!(report, ":{}", line);
                    }
                    report.push(')');
                }
                if let Some(suggestion) = &violation.suggestion {
                    let _ = write!(report, "\n  💡 {}", suggestion);
                }
                report.push('\n');
            }
            report.push('\n');
        }
    }

    report.push_str("\n## Recommendations\n");
    if s.must_violations > 0 {
        let _ = writeln!(
            report,
            "🚨 **Critical**: Fix {} MUST violations immediately.",
            s.must_violations
        );
    }
    if s.total_violations > s.must_violations {
        let _ = writeln!(
            report,
            "⚠️ **Important**: Address {} SHOULD violations for best practices.",
            s.total_violations - s.must_violations
        );
    }
    if s.total_violations == 0 {
        report.push_str("🎉 **Excellent**: All rules are compliant!\n");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PassPolicy, Violation};

    fn result(id: &str, policy: PassPolicy, violations: Vec<Violation>) -> (String, RuleResult) {
        let details = format!("{} compliance: {} violations found", id, violations.len());
        (
            id.to_string(),
            RuleResult::from_violations(id, policy, violations, details),
        )
    }

    fn results_from(entries: Vec<(String, RuleResult)>) -> BTreeMap<String, RuleResult> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_score_is_passed_over_total() {
        let results = results_from(vec![
            result("01A", PassPolicy::AllViolations, Vec::new()),
            result(
                "02A",
                PassPolicy::AllViolations,
                vec![Violation::new("02A-001", Severity::Must, "x")],
            ),
            result("03A", PassPolicy::AllViolations, Vec::new()),
            result("04A", PassPolicy::AllViolations, Vec::new()),
        ]);
        let s = summarize(&results);
        assert_eq!(s.rules_passed, 3);
        assert_eq!(s.rules_failed, 1);
        assert!((s.compliance_score - 75.0).abs() < f64::EPSILON);
        assert!(render(&results).contains("- **Compliance Score**: 75.0%"));
    }

    #[test]
    fn test_detail_block_formats_location_and_suggestion() {
        let violation = Violation::new("05B-001", Severity::Must, "Potential hardcoded secret found")
            .with_file("src/app.py")
            .with_line(12)
            .with_suggestion("Move secrets to environment variables or secret management system");
        let results = results_from(vec![result("05B", PassPolicy::AllViolations, vec![violation])]);

        let report = render(&results);
        assert!(report.contains("### 05B: ❌ FAIL"));
        assert!(report.contains(
            "- [MUST] Potential hardcoded secret found (src/app.py:12)\n  \
             💡 Move secrets to environment variables or secret management system\n"
        ));
    }

    #[test]
    fn test_recommendations_are_independent_conditions() {
        // One MUST and one SHOULD: both the critical and important messages
        // must appear.
        let results = results_from(vec![
            result(
                "02A",
                PassPolicy::MustOnly,
                vec![
                    Violation::new("02A-002", Severity::Must, "m"),
                    Violation::new("02A-003", Severity::Should, "s"),
                ],
            ),
        ]);
        let report = render(&results);
        assert!(report.contains("🚨 **Critical**: Fix 1 MUST violations immediately."));
        assert!(report.contains("⚠️ **Important**: Address 1 SHOULD violations for best practices."));
        assert!(!report.contains("🎉"));
    }

    #[test]
    fn test_clean_run_congratulates() {
        let results = results_from(vec![result("01C", PassPolicy::AllViolations, Vec::new())]);
        let report = render(&results);
        assert!(report.contains("🎉 **Excellent**: All rules are compliant!"));
        assert!(!report.contains("🚨"));
        assert!(!report.contains("⚠️"));
    }

    #[test]
    fn test_detail_blocks_sorted_by_rule_id() {
        let results = results_from(vec![
            result("09A", PassPolicy::MustOnly, Vec::new()),
            result("01A", PassPolicy::AllViolations, Vec::new()),
        ]);
        let report = render(&results);
        let first = report.find("### 01A").unwrap();
        let second = report.find("### 09A").unwrap();
        assert!(first < second);
    }
}
