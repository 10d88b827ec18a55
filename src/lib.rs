// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ccheck - Conventional Commits Pre-Commit Hook
//!
//! A CLI tool that validates git commit messages against the Conventional
//! Commits format, designed to run as a `commit-msg` / pre-commit hook.
//!
//! # Features
//!
//! - **Header Validation**: Checks the `type(scope)!: subject` shape
//! - **Configurable Types**: Accepts extra commit types on the command line
//! - **Always-On Conventional Types**: `feat` and `fix` are always accepted
//! - **Hook Friendly**: Exit code 0 on success, 1 on a bad message
//!
//! # Example
//!
//! ```
//! use ccheck::matcher::{is_conventional, DEFAULT_TYPES};
//!
//! let types: Vec<String> = DEFAULT_TYPES.iter().map(|s| s.to_string()).collect();
//!
//! assert!(is_conventional("feat(api)!: drop v1 endpoints", &types));
//! assert!(!is_conventional("fixed a thing", &types));
//! ```

// Module declarations
pub mod cli;
pub mod error;
pub mod matcher;
pub mod report;

// Re-exports for convenience
pub use error::{HookError, Result};
pub use matcher::is_conventional;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of ccheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
