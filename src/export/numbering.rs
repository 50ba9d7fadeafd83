//! Question numbering strategies
//!
//! The formatter never decides how a question is labelled; it asks a
//! [`QuestionNumbering`] strategy. Closures work directly, and
//! [`NumberingStyle`] covers the built-in conventions that can be stored in
//! settings.

use serde::{Deserialize, Serialize};

/// Prefix of questions that carry their own Part 2 label.
const PART2_PREFIX: &str = "Part 2";

// ─────────────────────────────────────────────────────────────────────────────
// Strategy Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Produces the heading shown for a question.
pub trait QuestionNumbering {
    /// Label for the question at 0-based `index`.
    fn label(&self, index: usize, question: &str) -> String;
}

impl<F> QuestionNumbering for F
where
    F: Fn(usize, &str) -> String,
{
    fn label(&self, index: usize, question: &str) -> String {
        self(index, question)
    }
}

/// The default label: `"<1-based index>. <question>"`.
pub fn sequential_label(index: usize, question: &str) -> String {
    format!("{}. {}", index + 1, question)
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Styles
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in numbering conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumberingStyle {
    /// Chosen per card: Part 2 cards number everything, Part 1 cards keep
    /// "Part 2 ..." headings. See [`NumberingStyle::resolve`].
    #[default]
    ByCard,
    /// Every question is numbered from 1
    Sequential,
    /// Questions already headed "Part 2 ..." keep their own text
    KeepPart2Labels,
}

impl NumberingStyle {
    /// Pick the concrete style for a card.
    ///
    /// Only `ByCard` depends on the card; explicit styles are returned as is.
    pub fn resolve(self, part2_card: bool) -> NumberingStyle {
        match self {
            NumberingStyle::ByCard if part2_card => NumberingStyle::Sequential,
            NumberingStyle::ByCard => NumberingStyle::KeepPart2Labels,
            style => style,
        }
    }

    /// Get the display name for this style.
    pub fn display_name(&self) -> &'static str {
        match self {
            NumberingStyle::ByCard => "By card",
            NumberingStyle::Sequential => "Sequential",
            NumberingStyle::KeepPart2Labels => "Keep Part 2 labels",
        }
    }

    /// Get a description of the style.
    pub fn description(&self) -> &'static str {
        match self {
            NumberingStyle::ByCard => "Sequential on Part 2 cards, Part 2 headings kept elsewhere",
            NumberingStyle::Sequential => "1. First question, 2. Second question, ...",
            NumberingStyle::KeepPart2Labels => {
                "Number questions, but leave \"Part 2 ...\" headings untouched"
            }
        }
    }

    /// Get all available styles.
    pub fn all() -> &'static [NumberingStyle] {
        &[
            NumberingStyle::ByCard,
            NumberingStyle::Sequential,
            NumberingStyle::KeepPart2Labels,
        ]
    }
}

impl QuestionNumbering for NumberingStyle {
    /// An unresolved `ByCard` labels like `KeepPart2Labels`.
    fn label(&self, index: usize, question: &str) -> String {
        match self {
            NumberingStyle::ByCard | NumberingStyle::KeepPart2Labels if question.starts_with(PART2_PREFIX) => {
                question.to_string()
            }
            _ => sequential_label(index, question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_label_is_one_based() {
        assert_eq!(sequential_label(0, "Do you like cats?"), "1. Do you like cats?");
        assert_eq!(sequential_label(9, "Why?"), "10. Why?");
    }

    #[test]
    fn test_sequential_style_numbers_everything() {
        let style = NumberingStyle::Sequential;
        assert_eq!(
            style.label(0, "Part 2: Describe a journey"),
            "1. Part 2: Describe a journey"
        );
    }

    #[test]
    fn test_keep_part2_labels() {
        let style = NumberingStyle::KeepPart2Labels;
        assert_eq!(
            style.label(0, "Part 2: Describe a journey"),
            "Part 2: Describe a journey"
        );
        assert_eq!(
            style.label(1, "Do you travel often?"),
            "2. Do you travel often?"
        );
    }

    #[test]
    fn test_closure_strategy() {
        let numbering = |index: usize, question: &str| format!("Q{}) {}", index + 1, question);
        assert_eq!(numbering.label(2, "Why?"), "Q3) Why?");
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_string(&NumberingStyle::KeepPart2Labels).unwrap();
        assert_eq!(json, r#""keep_part2_labels""#);
        assert_eq!(NumberingStyle::all().len(), 3);
        assert_eq!(NumberingStyle::default(), NumberingStyle::ByCard);
        assert_eq!(
            serde_json::from_str::<NumberingStyle>(r#""by_card""#).unwrap(),
            NumberingStyle::ByCard
        );
    }

    #[test]
    fn test_by_card_resolves_from_card_part() {
        let style = NumberingStyle::ByCard;
        assert_eq!(style.resolve(true), NumberingStyle::Sequential);
        assert_eq!(style.resolve(false), NumberingStyle::KeepPart2Labels);
        assert_eq!(
            NumberingStyle::Sequential.resolve(false),
            NumberingStyle::Sequential
        );
        assert_eq!(
            NumberingStyle::KeepPart2Labels.resolve(true),
            NumberingStyle::KeepPart2Labels
        );
    }
}
