//! Filesystem scanning helpers shared by the rule checks.
//!
//! Two traversal strategies exist and are deliberately kept apart:
//! - existence scans (`find_first`) stop at the first file whose content
//!   satisfies a predicate;
//! - line scans (`scan_lines`) visit every file and report every matching
//!   line with its 1-based number.
//!
//! Any file that cannot be read as text is skipped; it contributes no
//! evidence and no error. Enumeration is sorted so repeated runs over an
//! unchanged tree produce identical output.

use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Enumerate files under `root` matching any of the glob `patterns`,
/// recursively, in a deterministic (sorted, deduplicated) order.
pub fn enumerate(root: &Path, patterns: &[&str]) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs = root.join("**").join(pat);
        let pattern = abs.to_string_lossy().to_string();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() {
                    targets.push(entry);
                }
            }
        }
    }
    targets.sort();
    targets.dedup();
    targets
}

/// Existence scan: return the first enumerated file whose content satisfies
/// `pred`, or `None` when no readable file does.
pub fn find_first<F>(root: &Path, patterns: &[&str], pred: F) -> Option<PathBuf>
where
    F: Fn(&str) -> bool,
{
    for path in enumerate(root, patterns) {
        let content = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if pred(&content) {
            return Some(path);
        }
    }
    None
}

/// One line-level match produced by [`scan_lines`].
pub struct LineMatch {
    pub file: PathBuf,
    /// 1-based line number within the file.
    pub line_number: usize,
}

/// Collect scan: visit every enumerated file and emit one match per hit
/// that `hits` counts on each line. A line can contribute several matches
/// when more than one pattern fires on it. No early exit; unreadable files
/// are skipped.
pub fn scan_lines<F>(root: &Path, patterns: &[&str], hits: F) -> Vec<LineMatch>
where
    F: Fn(&str) -> usize,
{
    let mut matches = Vec::new();
    for path in enumerate(root, patterns) {
        let content = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => continue,
        };
        for (i, line) in content.split('\n').enumerate() {
            for _ in 0..hits(line) {
                matches.push(LineMatch {
                    file: path.clone(),
                    line_number: i + 1,
                });
            }
        }
    }
    matches
}

/// First existing path among root-relative `candidates`, if any.
pub fn first_existing(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|c| root.join(c))
        .find(|p| p.exists())
}
