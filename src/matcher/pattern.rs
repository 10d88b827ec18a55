// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pattern construction and the conformance predicate.

use regex::Regex;

use super::types::effective_types;

/// Regex fragment for an optional parenthesized scope, e.g. `(ci-tools)`.
const SCOPE: &str = r"(\([\w /:-]+\))?";

/// Regex fragment for the delimiter, with an optional breaking-change `!`.
const DELIMITER: &str = "!?:";

/// Regex fragment for the subject: a space, then the rest of the message.
/// With the `s` flag set, `.` also consumes line terminators, so body and
/// footer lines are accepted along with the subject.
const SUBJECT: &str = " .+";

/// Join the given types into a regex alternation, escaping each one so a
/// type name containing metacharacters cannot corrupt the pattern.
fn type_alternation(types: &[String]) -> String {
    types
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Build the full matching pattern for the given type set.
///
/// The pattern is anchored at both ends: the entire message, not just its
/// first line, must satisfy `type(scope)!: subject`.
pub fn build_pattern(types: &[String]) -> String {
    format!("(?s)^({}){}{}{}$", type_alternation(types), SCOPE, DELIMITER, SUBJECT)
}

/// Check whether `message` follows the Conventional Commits header shape.
///
/// The effective type set is `feat`/`fix` plus `requested` (see
/// [`effective_types`](super::effective_types)). This is a total predicate:
/// any string input yields a definite verdict and nothing panics.
pub fn is_conventional(message: &str, requested: &[String]) -> bool {
    let types = effective_types(requested);
    let pattern = build_pattern(&types);

    tracing::debug!(%pattern, "checking commit message");

    // Compilation cannot fail for escaped literal alternations; a non-match
    // verdict is still the right answer if it somehow does.
    Regex::new(&pattern)
        .map(|re| re.is_match(message))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{CONVENTIONAL_TYPES, DEFAULT_TYPES};

    fn owned(types: &[&str]) -> Vec<String> {
        types.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_type_alternation_includes_all_types() {
        let alt = type_alternation(&owned(&["bug", "quirk"]));
        let re = Regex::new(&format!("^(?:{})$", alt)).unwrap();

        assert!(re.is_match("bug"));
        assert!(re.is_match("quirk"));
        assert!(!re.is_match("feat"));
    }

    #[test]
    fn test_type_alternation_escapes_metacharacters() {
        let alt = type_alternation(&owned(&["a.b"]));
        let re = Regex::new(&format!("^(?:{})$", alt)).unwrap();

        assert!(re.is_match("a.b"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_scope_is_optional() {
        let re = Regex::new(&format!("^{}$", SCOPE)).unwrap();
        assert!(re.is_match(""));
    }

    #[test]
    fn test_scope_requires_parentheses() {
        let re = Regex::new(&format!("^{}$", SCOPE)).unwrap();

        assert!(!re.is_match("myscope"));
        assert!(re.is_match("(myscope)"));
    }

    #[test]
    fn test_scope_special_characters() {
        let re = Regex::new(&format!("^{}$", SCOPE)).unwrap();

        assert!(re.is_match("(ci-tests)"));
        assert!(re.is_match("(ci:tests)"));
        assert!(re.is_match("(ci/tests)"));
        assert!(re.is_match("(ci tests)"));
        assert!(re.is_match("(ci_tests)"));
    }

    #[test]
    fn test_delimiter_with_and_without_breaking_marker() {
        let re = Regex::new(&format!("^{}$", DELIMITER)).unwrap();

        assert!(re.is_match(":"));
        assert!(re.is_match("!:"));
    }

    #[test]
    fn test_subject_requires_leading_space() {
        let re = Regex::new(&format!("^{}$", SUBJECT)).unwrap();

        assert!(!re.is_match("subject"));
        assert!(re.is_match(" subject"));
    }

    #[test]
    fn test_build_pattern_shape() {
        let pattern = build_pattern(&owned(&["feat", "fix"]));
        assert_eq!(pattern, r"(?s)^(feat|fix)(\([\w /:-]+\))?!?: .+$");
    }

    #[test]
    fn test_each_default_type_is_accepted() {
        let types = owned(&DEFAULT_TYPES);
        for t in DEFAULT_TYPES {
            let message = format!("{}: commit message", t);
            assert!(is_conventional(&message, &types), "rejected '{}'", message);
        }
    }

    #[test]
    fn test_conventional_types_accepted_with_empty_type_list() {
        for t in CONVENTIONAL_TYPES {
            let message = format!("{}: commit message", t);
            assert!(is_conventional(&message, &[]), "rejected '{}'", message);
        }
    }

    #[test]
    fn test_custom_types_accepted_when_requested() {
        let custom = owned(&["bug", "quirk"]);
        assert!(is_conventional("bug: custom type", &custom));
        assert!(is_conventional("quirk: custom type", &custom));
    }

    #[test]
    fn test_custom_type_rejected_with_default_types() {
        assert!(!is_conventional("bug: custom type", &owned(&DEFAULT_TYPES)));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(!is_conventional("oops: forgot type", &owned(&DEFAULT_TYPES)));
    }

    #[test]
    fn test_breaking_change_marker() {
        assert!(is_conventional("fix!: commit message", &[]));
        assert!(is_conventional("feat(api)!: change", &[]));
    }

    #[test]
    fn test_scoped_message() {
        assert!(is_conventional("fix(parser): handle empty input", &[]));
        assert!(is_conventional(
            "chore(ci-tools): description",
            &owned(&["chore"])
        ));
    }

    #[test]
    fn test_unparenthesized_scope_rejected() {
        assert!(!is_conventional("feat api: change", &[]));
    }

    #[test]
    fn test_missing_space_after_delimiter_rejected() {
        assert!(!is_conventional("feat:change", &[]));
    }

    #[test]
    fn test_missing_closing_parenthesis_rejected() {
        assert!(!is_conventional("feat(api: change", &[]));
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(!is_conventional("", &[]));
        assert!(!is_conventional("feat: ", &[]));
    }

    #[test]
    fn test_missing_delimiter_rejected() {
        assert!(!is_conventional("feat add widget", &[]));
    }

    #[test]
    fn test_multiline_body_and_footer_accepted() {
        let message = "feat!: break api\n\nBREAKING CHANGE: old field removed";
        assert!(is_conventional(message, &owned(&DEFAULT_TYPES)));
    }

    #[test]
    fn test_trailing_newline_accepted() {
        assert!(is_conventional("feat: add widget\n", &[]));
    }

    #[test]
    fn test_prefix_overlapping_types() {
        // Full-string anchoring makes alternation order irrelevant here.
        let types = owned(&["fixup"]);
        assert!(is_conventional("fixup: squash me", &types));
        assert!(is_conventional("fix: still accepted", &types));
    }

    #[test]
    fn test_predicate_is_pure() {
        let types = owned(&["chore"]);
        let first = is_conventional("chore: tidy", &types);
        let second = is_conventional("chore: tidy", &types);
        assert_eq!(first, second);
    }
}
