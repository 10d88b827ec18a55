// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the ccheck application.
//!
//! The matcher itself is a total predicate and never fails; errors only come
//! from the CLI boundary (unreadable message file, bad arguments).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ccheck operations.
#[derive(Error, Debug)]
pub enum HookError {
    // The commit message file could not be read
    #[error("Failed to read commit message file '{path}': {source}")]
    MessageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ccheck operations.
pub type Result<T> = std::result::Result<T, HookError>;
