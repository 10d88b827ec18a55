// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command-line interface.
//!
//! Argument parsing and the hook entry point that wires file reading, the
//! matcher, and reporting together.

mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::run;
