//! Inline markup removal
//!
//! Stored answers are trusted content, so tags are removed structurally
//! without any attempt to validate or interpret them.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a tag, or an unterminated `<...` remnant running to the end of input.
static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+(?:>|$)").expect("tag pattern is valid"))
}

/// Remove every angle-bracket tag from `fragment` and trim the result.
///
/// Whitespace inside the fragment is left alone. Stripping is idempotent.
pub fn strip_markup(fragment: &str) -> String {
    tag_pattern().replace_all(fragment, "").trim().to_string()
}

/// True if `fragment` holds anything [`strip_markup`] would remove.
pub fn contains_markup(fragment: &str) -> bool {
    tag_pattern().is_match(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_simple_tags() {
        assert_eq!(strip_markup("I <b>really</b> like it."), "I really like it.");
    }

    #[test]
    fn test_strips_line_breaks_without_inserting_space() {
        assert_eq!(
            strip_markup("They self-groom.<br><br>Extra note."),
            "They self-groom.Extra note."
        );
    }

    #[test]
    fn test_trims_outer_whitespace_only() {
        assert_eq!(strip_markup("  two  spaces\n inside  "), "two  spaces\n inside");
    }

    #[test]
    fn test_unterminated_tag_removed() {
        assert_eq!(strip_markup("Cats are great <span class=\"x\""), "Cats are great");
    }

    #[test]
    fn test_lone_brackets_kept() {
        assert_eq!(strip_markup("a <> b"), "a <> b");
        assert_eq!(strip_markup("x >= y"), "x >= y");
    }

    #[test]
    fn test_contains_markup() {
        assert!(contains_markup("<em>hi</em>"));
        assert!(!contains_markup("plain text"));
    }

    proptest! {
        #[test]
        fn prop_strip_is_idempotent(input in "[ a-z<>/\\n]{0,40}") {
            let once = strip_markup(&input);
            prop_assert_eq!(strip_markup(&once), once);
        }

        #[test]
        fn prop_stripped_text_has_no_tags(input in "[ a-z<>br/]{0,40}") {
            prop_assert!(!contains_markup(&strip_markup(&input)));
        }
    }
}
