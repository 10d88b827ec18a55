// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type sets.

/// Types that are always accepted, regardless of configuration.
pub const CONVENTIONAL_TYPES: [&str; 2] = ["feat", "fix"];

/// The standard Conventional Commits types, used by the CLI when the caller
/// does not supply any types of their own.
pub const DEFAULT_TYPES: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Merge the caller-supplied types with [`CONVENTIONAL_TYPES`] to form the
/// type set actually used for matching.
///
/// An empty `configured` list yields exactly the conventional types; callers
/// may rely on passing `&[]` to restrict validation to `feat`/`fix` only.
/// Duplicates are not removed: the list is only ever used to build a regex
/// alternation, where repeated branches are harmless.
pub fn effective_types(configured: &[String]) -> Vec<String> {
    let mut types: Vec<String> = CONVENTIONAL_TYPES.iter().map(|s| s.to_string()).collect();

    if !configured.is_empty() {
        types.extend(configured.iter().cloned());
    }

    types
}
