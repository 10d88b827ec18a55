// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdict reporting for terminal and machine-readable output.

use console::style;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Example messages shown to the user when their commit message is rejected.
const GOOD_EXAMPLES: [&str; 4] = [
    "feat: Added new feature",
    "feat(billing): Improved invoices",
    "fix: Fixed speed of execution",
    "feat!: This is breaking change",
];

/// The outcome of checking a single commit message.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// The message that was checked.
    pub message: String,
    /// The type set the message was checked against.
    pub accepted_types: Vec<String>,
    /// Whether the message conforms.
    pub valid: bool,
}

impl CheckReport {
    /// Create a new report.
    pub fn new(message: String, accepted_types: Vec<String>, valid: bool) -> Self {
        Self {
            message,
            accepted_types,
            valid,
        }
    }

    /// Print the report to stdout. Text output is silent on success; the
    /// exit code is the success signal for hook runners.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => {
                if !self.valid {
                    self.print_failure()
                }
            }
        }
    }

    /// Print the failure explanation in text format.
    fn print_failure(&self) {
        println!(
            "{} {}",
            style("Bad commit message:").red().bold(),
            self.message
        );
        println!();
        println!(
            "{}",
            style(
                "Your commit message does not follow Conventional Commits formatting.\n\
                 \n\
                 Conventional Commits start with one of the below types, followed by a colon,\n\
                 followed by the commit message:"
            )
            .yellow()
        );
        println!();
        println!("{}", self.accepted_types.join(" "));
        println!();
        println!("{}", style("Good examples:").yellow());
        for example in GOOD_EXAMPLES {
            println!("{}", example);
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }
}
