// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook execution.

use std::fs;

use crate::error::{HookError, Result};
use crate::matcher::{effective_types, is_conventional, DEFAULT_TYPES};
use crate::report::CheckReport;

use super::args::Cli;

/// Run the hook with the given arguments.
///
/// Returns `Ok(true)` when the commit message conforms and `Ok(false)` when
/// it does not; the caller maps the verdict to the process exit code. Errors
/// only arise from reading the message file.
pub fn run(cli: &Cli) -> Result<bool> {
    let configured = cli.types();

    // No types on the command line means the standard eleven. The matcher's
    // own empty-list fallback to just feat/fix stays reachable through the
    // library API.
    let types: Vec<String> = if configured.is_empty() {
        DEFAULT_TYPES.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    };

    let path = cli.input();
    let message = fs::read_to_string(path).map_err(|source| HookError::MessageRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), types = ?types, "checking commit message file");

    let valid = is_conventional(&message, &types);
    let report = CheckReport::new(message, effective_types(&types), valid);
    report.print(cli.format);

    Ok(valid)
}
