// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional Commit matcher.
//!
//! This module decides whether a commit message follows the Conventional
//! Commits header shape `type(optional-scope)!: subject`, given a set of
//! accepted type prefixes.

mod pattern;
mod types;

pub use pattern::{build_pattern, is_conventional};
pub use types::{effective_types, CONVENTIONAL_TYPES, DEFAULT_TYPES};
