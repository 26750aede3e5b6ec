//! Configuration handling for the checker.

use clap::Parser;
use std::path::PathBuf;

/// Static consistency checker for login credential fields.
///
/// Scans a backend route module and a frontend auth-service module and
/// reports whether both agree on the credential key (`email` vs
/// `username`) used during login.
#[derive(Parser, Debug, Clone)]
#[command(name = "authlint")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the backend routes file containing the /login handler
    #[arg(
        short,
        long,
        default_value = "document-generator-backend/src/routes/auth.py"
    )]
    pub backend: PathBuf,

    /// Path to the frontend service file containing the login call
    #[arg(
        short,
        long,
        default_value = "document-generator-frontend/src/services/authService.js"
    )]
    pub frontend: PathBuf,

    /// Output the report as JSON instead of the one-line message
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: PathBuf::from("document-generator-backend/src/routes/auth.py"),
            frontend: PathBuf::from("document-generator-frontend/src/services/authService.js"),
            json: false,
            verbose: false,
        }
    }
}
