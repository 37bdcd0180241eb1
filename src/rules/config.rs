//! Configuration rules: secrets management (05B).

use crate::models::{Severity, Violation};
use crate::scan;
use regex::Regex;
use std::path::Path;

const CODE_PATTERNS: [&str; 5] = ["*.py", "*.js", "*.ts", "*.java", "*.go"];

/// Heuristic literal-assignment patterns. Deliberately naive: they match the
/// keyword anywhere on a line, prose included, and that looseness is part of
/// the rule's contract.
const SECRET_PATTERNS: [&str; 4] = [
    r#"(?i)password\s*=\s*["'][^"']+["']"#,
    r#"(?i)api_key\s*=\s*["'][^"']+["']"#,
    r#"(?i)secret\s*=\s*["'][^"']+["']"#,
    r#"(?i)token\s*=\s*["'][^"']+["']"#,
];

/// 05B: secrets management. Every line in every source file matching a
/// secret-assignment pattern yields one MUST violation carrying the file
/// path and 1-based line number. A line matching several patterns yields
/// one violation per pattern. No early exit.
pub fn secrets_management(root: &Path) -> Vec<Violation> {
    let regexes: Vec<Regex> = SECRET_PATTERNS
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect();

    scan::scan_lines(root, &CODE_PATTERNS, |line| {
        regexes.iter().filter(|re| re.is_match(line)).count()
    })
    .into_iter()
    .map(|m| {
        Violation::new("05B-001", Severity::Must, "Potential hardcoded secret found")
            .with_file(&m.file.display().to_string())
            .with_line(m.line_number)
            .with_suggestion("Move secrets to environment variables or secret management system")
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_hardcoded_password_reports_line_number() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("settings.py"),
            "import os\n\npassword = \"hunter2\"\n",
        )
        .unwrap();

        let vs = secrets_management(root);
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].rule_id, "05B-001");
        assert_eq!(vs[0].severity, Severity::Must);
        assert_eq!(vs[0].line_number, Some(3));
        assert!(vs[0].file_path.as_deref().unwrap().ends_with("settings.py"));
    }

    #[test]
    fn test_every_matching_line_is_reported() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("a.go"),
            "api_key = \"k1\"\nok := 1\ntoken = 'k2'\n",
        )
        .unwrap();
        fs::write(root.join("b.ts"), "const secret = \"k3\";\n").unwrap();

        let vs = secrets_management(root);
        assert_eq!(vs.len(), 3);
        let lines: Vec<Option<usize>> = vs.iter().map(|v| v.line_number).collect();
        assert_eq!(lines, vec![Some(1), Some(3), Some(1)]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Main.java"), "String PASSWORD = \"x\";\n").unwrap();

        assert_eq!(secrets_management(root).len(), 1);
    }

    #[test]
    fn test_env_lookups_do_not_match() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("app.py"), "password = os.environ[\"DB_PASS\"]\n").unwrap();

        // No quoted literal directly after '='; the heuristic stays quiet.
        assert!(secrets_management(root).is_empty());
    }
}
