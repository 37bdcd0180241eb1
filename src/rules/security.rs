//! Security rules: authentication configuration (03A).

use crate::models::{Severity, Violation};
use crate::scan;
use std::path::Path;

const AUTH_KEYWORDS: [&str; 5] = ["auth", "jwt", "oauth", "saml", "ldap"];

/// 03A: authentication. Looks for authentication-related keywords in
/// configuration and environment files; existence semantics, the scan stops
/// at the first file that mentions any keyword.
pub fn authentication(root: &Path) -> Vec<Violation> {
    let found = scan::find_first(
        root,
        &["*.yaml", "*.yml", "*.json", "*.env*"],
        |content| {
            let lower = content.to_lowercase();
            AUTH_KEYWORDS.iter().any(|kw| lower.contains(kw))
        },
    );

    if found.is_none() {
        vec![
            Violation::new(
                "03A-001",
                Severity::Should,
                "No authentication configuration found",
            )
            .with_suggestion("Configure authentication system (JWT, OAuth2, etc.)"),
        ]
    } else {
        Vec::new()
    }
}
