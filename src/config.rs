//! Configuration discovery and effective settings resolution.
//!
//! Regula reads an optional `regula.toml` from the project root and merges
//! it with CLI flags to produce an `Effective` config. Defaults:
//! - `output`: `human`
//! - `report`: none (print to stdout)
//!
//! Overrides precedence: CLI > config file > defaults. A missing config
//! file is not an error.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `regula.toml`.
pub struct RegulaConfig {
    pub output: Option<String>,
    /// Default report path relative to the project root.
    pub report: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after precedence.
pub struct Effective {
    pub project_root: PathBuf,
    pub output: String,
    pub report_file: Option<PathBuf>,
}

/// Load `regula.toml` from `root`, if present and parseable.
pub fn load_config(root: &Path) -> Option<RegulaConfig> {
    let path = root.join("regula.toml");
    let content = fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Apply CLI > config > defaults precedence.
pub fn resolve_effective(
    project_root: &str,
    output_file: Option<&str>,
    output: Option<&str>,
) -> Effective {
    let root = PathBuf::from(project_root);
    let cfg = load_config(&root).unwrap_or_default();

    let output = output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let report_file = output_file
        .map(PathBuf::from)
        .or_else(|| cfg.report.map(|r| root.join(r)));

    Effective {
        project_root: root,
        output,
        report_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str().unwrap(), None, None);
        assert_eq!(eff.output, "human");
        assert!(eff.report_file.is_none());
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("regula.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
report = "compliance.md"
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str().unwrap(), None, None);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.report_file, Some(root.join("compliance.md")));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("regula.toml"), "output = \"json\"\n").unwrap();

        let eff = resolve_effective(root.to_str().unwrap(), Some("out.md"), Some("human"));
        assert_eq!(eff.output, "human");
        assert_eq!(eff.report_file, Some(PathBuf::from("out.md")));
    }
}
