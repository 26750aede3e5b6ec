//! authlint - Static consistency checker for login credential fields.
//!
//! This library checks that the two sides of a project agree on the
//! credential field used during login by:
//! - Locating the backend `/login` handler body and reading which request
//!   key it accesses (`email` or `username`)
//! - Locating the frontend `post('/auth/login', {...})` payload literal
//!   and reading which key it sends
//! - Comparing the two labels and reporting a match or a mismatch
//!
//! # Example
//!
//! ```
//! use authlint::Checker;
//!
//! let checker = Checker::new();
//! let report = checker.check_sources(
//!     "@auth_bp.route('/login')\ndef login():\n    email = data.get('email')\n",
//!     "api.post('/auth/login', { email: credentials.email })",
//! );
//! assert!(report.consistent);
//! ```

pub mod checker;
pub mod config;
pub mod extract;
pub mod output;
pub mod types;

pub use checker::Checker;
pub use config::Config;
pub use extract::{BackendExtractor, FrontendExtractor};
pub use output::ConsoleOutput;
pub use types::{AuthlintError, CheckReport, FieldLabel, Result};
