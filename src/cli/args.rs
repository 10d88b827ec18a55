// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::Path;

/// ccheck - Conventional Commits Pre-Commit Hook
///
/// Check a git commit message for Conventional Commits formatting.
#[derive(Parser, Debug)]
#[command(name = "ccheck")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::version_string())]
#[command(about = "Check a git commit message for Conventional Commits formatting", long_about = None)]
pub struct Cli {
    /// Optional commit types to accept, followed by the commit message file.
    ///
    /// The file is always the last argument; pre-commit appends the message
    /// filename after any extra args configured for the hook. When no types
    /// are given, the standard Conventional Commits types are used.
    #[arg(value_name = "TYPES_AND_FILE", required = true, num_args = 1..)]
    pub args: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// The caller-supplied commit types (everything before the file path).
    pub fn types(&self) -> &[String] {
        &self.args[..self.args.len() - 1]
    }

    /// The path to the commit message file (always the last argument).
    pub fn input(&self) -> &Path {
        Path::new(&self.args[self.args.len() - 1])
    }
}
