//! Regex extractors that resolve the login credential field on each side.
//!
//! Both extractors work on raw source text. No AST is built: the tool is
//! advisory, and pattern scanning is enough to tell `email` from
//! `username` in the two places that matter.

use crate::types::FieldLabel;
use regex::Regex;
use tracing::debug;

/// Extracts the credential field read by the backend login handler.
pub struct BackendExtractor {
    /// Captures the `/login` handler body up to the next route decoration.
    login_section: Regex,
}

impl BackendExtractor {
    pub fn new() -> Self {
        Self {
            // (?s) so the body capture scans across line breaks.
            login_section: Regex::new(r"(?s)@auth_bp\.route\('/login'.*?def login\(\):([^@]+)")
                .unwrap(),
        }
    }

    /// Resolve the field label from the backend routes source text.
    ///
    /// Returns `Unknown` when the login route block is missing or the body
    /// reads neither candidate key. Email is checked before username.
    pub fn extract(&self, source: &str) -> FieldLabel {
        let body = match self.login_section.captures(source).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            None => {
                debug!("backend: no /login route block found");
                return FieldLabel::Unknown;
            }
        };

        if body.contains("data.get('email'") {
            debug!("backend: handler reads data.get('email')");
            return FieldLabel::Email;
        }
        if body.contains("data.get('username'") {
            debug!("backend: handler reads data.get('username')");
            return FieldLabel::Username;
        }

        debug!("backend: handler body reads neither candidate key");
        FieldLabel::Unknown
    }
}

impl Default for BackendExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the credential field sent in the frontend login payload.
pub struct FrontendExtractor {
    /// Captures the object literal passed as the login request body.
    login_payload: Regex,
}

impl FrontendExtractor {
    pub fn new() -> Self {
        Self {
            // Non-greedy brace-bounded capture: stops at the first `}`,
            // truncating payloads that contain nested object literals.
            login_payload: Regex::new(r"post\('/auth/login',\s*\{([^}]+)\}\)").unwrap(),
        }
    }

    /// Resolve the field label from the frontend auth-service source text.
    ///
    /// Username is checked before email, the reverse of the backend order.
    /// The asymmetry is long-standing observable behavior and is kept as is.
    pub fn extract(&self, source: &str) -> FieldLabel {
        let payload = match self.login_payload.captures(source).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            None => {
                debug!("frontend: no post('/auth/login', {{...}}) call found");
                return FieldLabel::Unknown;
            }
        };

        if payload.contains("username") {
            debug!("frontend: payload carries 'username'");
            return FieldLabel::Username;
        }
        if payload.contains("email") {
            debug!("frontend: payload carries 'email'");
            return FieldLabel::Email;
        }

        debug!("frontend: payload carries neither candidate key");
        FieldLabel::Unknown
    }
}

impl Default for FrontendExtractor {
    fn default() -> Self {
        Self::new()
    }
}
