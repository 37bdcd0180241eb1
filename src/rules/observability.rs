//! Observability rules: logging standards (08B).

use crate::models::{Severity, Violation};
use std::path::Path;

const LOGGING_CONFIGS: [&str; 5] = [
    "logging.yaml",
    "logging.yml",
    "log4j.properties",
    "logback.xml",
    "winston.config.js",
];

/// 08B: logging standards. A logging configuration file is recommended at
/// the project root; absence is a SHOULD finding only.
pub fn logging_standards(root: &Path) -> Vec<Violation> {
    let has_config = LOGGING_CONFIGS.iter().any(|c| root.join(c).exists());
    if !has_config {
        vec![
            Violation::new("08B-001", Severity::Should, "No logging configuration found")
                .with_suggestion("Create logging configuration with structured format"),
        ]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_should_level() {
        let dir = tempdir().unwrap();
        let vs = logging_standards(dir.path());
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].rule_id, "08B-001");
        assert_eq!(vs[0].severity, Severity::Should);
    }

    #[test]
    fn test_any_known_config_satisfies() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("logback.xml"), "<configuration/>").unwrap();

        assert!(logging_standards(root).is_empty());
    }
}
