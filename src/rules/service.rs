//! Service architecture rules: container design (02A).

use crate::models::{Severity, Violation};
use crate::scan;
use std::fs;
use std::path::Path;

const DOCKERFILE_CANDIDATES: [&str; 3] = ["Dockerfile", "docker/Dockerfile", "build/Dockerfile"];

/// 02A: container design.
///
/// A Dockerfile must exist at one of the candidate locations. When present,
/// only the first existing candidate is inspected for a non-root `USER `
/// directive (MUST) and a `HEALTHCHECK` directive (SHOULD). An unreadable
/// Dockerfile contributes no directive findings.
pub fn container_design(root: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();

    match scan::first_existing(root, &DOCKERFILE_CANDIDATES) {
        None => {
            violations.push(
                Violation::new("02A-001", Severity::Must, "Missing Dockerfile")
                    .with_suggestion("Create Dockerfile with multi-stage build"),
            );
        }
        Some(dockerfile) => {
            if let Ok(content) = fs::read_to_string(&dockerfile) {
                let path = dockerfile.display().to_string();
                if !content.contains("USER ") {
                    violations.push(
                        Violation::new(
                            "02A-002",
                            Severity::Must,
                            "Dockerfile missing non-root USER directive",
                        )
                        .with_file(&path)
                        .with_suggestion("Add USER directive to run as non-root"),
                    );
                }
                if !content.contains("HEALTHCHECK") {
                    violations.push(
                        Violation::new(
                            "02A-003",
                            Severity::Should,
                            "Dockerfile missing HEALTHCHECK directive",
                        )
                        .with_file(&path)
                        .with_suggestion("Add HEALTHCHECK for container health monitoring"),
                    );
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_dockerfile_is_one_must() {
        let dir = tempdir().unwrap();
        let vs = container_design(dir.path());
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].rule_id, "02A-001");
        assert_eq!(vs[0].severity, Severity::Must);
    }

    #[test]
    fn test_dockerfile_without_directives() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Dockerfile"), "FROM alpine\nCOPY . /app\n").unwrap();

        let vs = container_design(root);
        let ids: Vec<&str> = vs.iter().map(|v| v.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["02A-002", "02A-003"]);
        assert_eq!(vs[0].severity, Severity::Must);
        assert_eq!(vs[1].severity, Severity::Should);
        assert!(vs[0].file_path.as_deref().unwrap().ends_with("Dockerfile"));
    }

    #[test]
    fn test_compliant_dockerfile() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("Dockerfile"),
            "FROM alpine\nUSER app\nHEALTHCHECK CMD curl -f http://localhost/health\n",
        )
        .unwrap();

        assert!(container_design(root).is_empty());
    }

    #[test]
    fn test_only_first_candidate_inspected() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // Root Dockerfile is compliant; the docker/ one would fail both
        // directive checks but must be ignored.
        fs::write(root.join("Dockerfile"), "FROM alpine\nUSER app\nHEALTHCHECK CMD ok\n")
            .unwrap();
        fs::create_dir_all(root.join("docker")).unwrap();
        fs::write(root.join("docker/Dockerfile"), "FROM alpine\n").unwrap();

        assert!(container_design(root).is_empty());
    }
}
