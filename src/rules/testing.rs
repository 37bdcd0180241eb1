//! Testing rules: testing strategy (07A).

use crate::models::{Severity, Violation};
use std::path::Path;

const TEST_DIRS: [&str; 4] = ["tests", "test", "__tests__", "spec"];

const TEST_CONFIGS: [&str; 5] = [
    "jest.config.js",
    "jest.config.json",
    "pytest.ini",
    "test.config.js",
    "vitest.config.js",
];

/// 07A: testing strategy. Requires a conventional test directory and a test
/// runner configuration file at the project root.
pub fn testing_strategy(root: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();

    let has_test_dir = TEST_DIRS
        .iter()
        .map(|d| root.join(d))
        .any(|p| p.exists() && p.is_dir());
    if !has_test_dir {
        violations.push(
            Violation::new("07A-001", Severity::Must, "No test directory found")
                .with_suggestion("Create tests/ directory with unit, integration, and e2e tests"),
        );
    }

    let has_config = TEST_CONFIGS.iter().any(|c| root.join(c).exists());
    if !has_config {
        violations.push(
            Violation::new("07A-002", Severity::Must, "No test configuration found")
                .with_suggestion("Create test configuration file (jest.config.js, pytest.ini, etc.)"),
        );
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_project_fails_both_conditions() {
        let dir = tempdir().unwrap();
        let vs = testing_strategy(dir.path());
        let ids: Vec<&str> = vs.iter().map(|v| v.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["07A-001", "07A-002"]);
        assert!(vs.iter().all(|v| v.severity == Severity::Must));
    }

    #[test]
    fn test_file_named_like_test_dir_does_not_count() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("spec"), "not a directory").unwrap();
        fs::write(root.join("pytest.ini"), "[pytest]").unwrap();

        let vs = testing_strategy(root);
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].rule_id, "07A-001");
    }

    #[test]
    fn test_dir_and_config_present() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("__tests__")).unwrap();
        fs::write(root.join("vitest.config.js"), "export default {}").unwrap();

        assert!(testing_strategy(root).is_empty());
    }
}
