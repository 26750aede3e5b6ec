//! Main checker orchestrating extraction and comparison.

use crate::extract::{BackendExtractor, FrontendExtractor};
use crate::types::{CheckReport, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Compares the login credential field between the two sides of a project.
pub struct Checker {
    backend: BackendExtractor,
    frontend: FrontendExtractor,
}

impl Checker {
    pub fn new() -> Self {
        Self {
            backend: BackendExtractor::new(),
            frontend: FrontendExtractor::new(),
        }
    }

    /// Run the check against two source files on disk.
    ///
    /// A missing or unreadable file is fatal and propagates to the caller;
    /// a pattern miss inside a readable file resolves that side to
    /// `unknown` and the comparison still runs.
    pub fn check_files(&self, backend_path: &Path, frontend_path: &Path) -> Result<CheckReport> {
        debug!("reading backend routes from {}", backend_path.display());
        let backend_text = fs::read_to_string(backend_path)?;

        debug!("reading frontend service from {}", frontend_path.display());
        let frontend_text = fs::read_to_string(frontend_path)?;

        Ok(self.check_sources(&backend_text, &frontend_text))
    }

    /// Run the check against in-memory source text.
    pub fn check_sources(&self, backend_text: &str, frontend_text: &str) -> CheckReport {
        let backend_field = self.backend.extract(backend_text);
        let frontend_field = self.frontend.extract(frontend_text);

        debug!(
            "resolved labels: backend={}, frontend={}",
            backend_field, frontend_field
        );

        CheckReport::new(backend_field, frontend_field)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldLabel;

    const BACKEND_EMAIL: &str = "@auth_bp.route('/login', methods=['POST'])\ndef login():\n    data = request.get_json()\n    email = data.get('email')\n";
    const BACKEND_USERNAME: &str = "@auth_bp.route('/login', methods=['POST'])\ndef login():\n    data = request.get_json()\n    username = data.get('username')\n";
    const FRONTEND_EMAIL: &str =
        "api.post('/auth/login', { email: credentials.email, password: credentials.password })";

    #[test]
    fn test_consistent_sides() {
        let checker = Checker::new();
        let report = checker.check_sources(BACKEND_EMAIL, FRONTEND_EMAIL);
        assert_eq!(report.backend_field, FieldLabel::Email);
        assert_eq!(report.frontend_field, FieldLabel::Email);
        assert!(report.consistent);
    }

    #[test]
    fn test_mismatched_sides() {
        let checker = Checker::new();
        let report = checker.check_sources(BACKEND_USERNAME, FRONTEND_EMAIL);
        assert_eq!(report.backend_field, FieldLabel::Username);
        assert_eq!(report.frontend_field, FieldLabel::Email);
        assert!(!report.consistent);
    }

    #[test]
    fn test_unknown_backend_still_compared() {
        // No /login route at all: the backend side degrades to unknown and
        // the mismatch against the frontend's email is still reported.
        let checker = Checker::new();
        let report = checker.check_sources("def healthcheck():\n    return 'ok'\n", FRONTEND_EMAIL);
        assert_eq!(report.backend_field, FieldLabel::Unknown);
        assert_eq!(report.frontend_field, FieldLabel::Email);
        assert!(!report.consistent);
    }

    #[test]
    fn test_idempotent_over_unchanged_input() {
        let checker = Checker::new();
        let first = checker.check_sources(BACKEND_EMAIL, FRONTEND_EMAIL);
        let second = checker.check_sources(BACKEND_EMAIL, FRONTEND_EMAIL);
        assert_eq!(first.backend_field, second.backend_field);
        assert_eq!(first.frontend_field, second.frontend_field);
        assert_eq!(first.consistent, second.consistent);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let checker = Checker::new();
        let result = checker.check_files(
            Path::new("/nonexistent/auth.py"),
            Path::new("/nonexistent/authService.js"),
        );
        assert!(result.is_err());
    }
}
