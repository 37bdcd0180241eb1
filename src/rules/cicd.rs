//! CI/CD rules: pipeline configuration (09A).

use crate::models::{Severity, Violation};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

const PIPELINE_CANDIDATES: [&str; 6] = [
    ".github/workflows",
    ".gitlab-ci.yml",
    ".travis.yml",
    "azure-pipelines.yml",
    "Jenkinsfile",
    ".circleci/config.yml",
];

const REQUIRED_STAGES: [&str; 3] = ["test", "build", "security"];

/// 09A: CI/CD pipelines.
///
/// Some pipeline configuration must exist (MUST). When GitHub Actions is
/// used, every workflow file is additionally scanned for the test, build,
/// and security stage tokens; each file missing any of them yields one
/// SHOULD finding listing the absent tokens.
pub fn pipelines(root: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();

    let pipeline_exists = PIPELINE_CANDIDATES.iter().any(|c| root.join(c).exists());
    if !pipeline_exists {
        violations.push(
            Violation::new(
                "09A-001",
                Severity::Must,
                "No CI/CD pipeline configuration found",
            )
            .with_suggestion("Create .github/workflows/ci-cd.yml or equivalent pipeline"),
        );
    }

    let workflows_dir = root.join(".github").join("workflows");
    if workflows_dir.exists() {
        for workflow in workflow_files(&workflows_dir) {
            let content = match fs::read_to_string(&workflow) {
                Ok(s) => s.to_lowercase(),
                Err(_) => continue,
            };
            let missing: Vec<&str> = REQUIRED_STAGES
                .iter()
                .filter(|stage| !content.contains(**stage))
                .copied()
                .collect();
            if !missing.is_empty() {
                violations.push(
                    Violation::new(
                        "09A-002",
                        Severity::Should,
                        &format!("Workflow missing stages: {}", missing.join(", ")),
                    )
                    .with_file(&workflow.display().to_string())
                    .with_suggestion("Add test, build, and security stages to pipeline"),
                );
            }
        }
    }

    violations
}

/// Direct `*.yml`/`*.yaml` children of the workflows directory, sorted.
fn workflow_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for ext in ["*.yml", "*.yaml"] {
        let pattern = dir.join(ext).to_string_lossy().to_string();
        if let Ok(entries) = glob(&pattern) {
            files.extend(entries.flatten().filter(|p| p.is_file()));
        }
    }
    files.sort();
    files
}
