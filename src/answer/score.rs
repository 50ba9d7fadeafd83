//! Score labels and version selection
//!
//! Score labels are strings ("6", "6.5", "7.0") that order by their decimal
//! value. Selection is an exact label match; a miss is an ordinary `None`
//! that the caller renders as a placeholder.

use super::model::{AnswerVersion, SampleAnswer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Default score shown when a card's answers are first opened.
pub const DEFAULT_INITIAL_SCORE: &str = "6.5";

// ─────────────────────────────────────────────────────────────────────────────
// Score Label
// ─────────────────────────────────────────────────────────────────────────────

/// A score band label.
///
/// Ordering is numeric where the label parses as a decimal number. Labels
/// that do not parse sort after every numeric label. Equal numeric values
/// with different spellings ("6" and "6.0") are ordered by their text so the
/// ordering stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLabel(String);

impl ScoreLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The decimal value of the label, if it has one.
    pub fn numeric(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

impl Ord for ScoreLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ScoreLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScoreLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for ScoreLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Default for ScoreLabel {
    fn default() -> Self {
        Self::from(DEFAULT_INITIAL_SCORE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Find the version written for `score`.
///
/// There is no fallback: a score the question was never written for yields
/// `None` even if a neighbouring score exists.
pub fn select_version<'a>(
    versions: &'a [AnswerVersion],
    score: &ScoreLabel,
) -> Option<&'a AnswerVersion> {
    versions.iter().find(|version| &version.score == score)
}

/// Every score label used anywhere in a card, deduplicated and sorted
/// ascending by value.
pub fn available_scores(answers: &[SampleAnswer]) -> Vec<ScoreLabel> {
    let mut seen = HashSet::new();
    let mut scores: Vec<ScoreLabel> = answers
        .iter()
        .flat_map(|qa| qa.versions.iter().map(|version| &version.score))
        .filter(|&score| seen.insert(score.as_str()))
        .cloned()
        .collect();
    scores.sort();
    scores
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(scores: &[ScoreLabel]) -> Vec<&str> {
        scores.iter().map(ScoreLabel::as_str).collect()
    }

    fn question(scores: &[&str]) -> SampleAnswer {
        SampleAnswer::new(
            "Q",
            scores
                .iter()
                .map(|s| AnswerVersion::new(*s, format!("answer at {}", s).as_str()))
                .collect(),
        )
    }

    #[test]
    fn test_select_existing_score() {
        let qa = question(&["6.0", "7.0", "8.0"]);
        let found = select_version(&qa.versions, &ScoreLabel::from("7.0")).unwrap();
        assert_eq!(found.score.as_str(), "7.0");
    }

    #[test]
    fn test_select_missing_score_is_none() {
        let qa = question(&["6.0", "7.0", "8.0"]);
        assert!(select_version(&qa.versions, &ScoreLabel::from("6.5")).is_none());
    }

    #[test]
    fn test_select_does_not_match_numerically_equal_spelling() {
        let qa = question(&["7.0"]);
        assert!(select_version(&qa.versions, &ScoreLabel::from("7")).is_none());
    }

    #[test]
    fn test_available_scores_union_sorted() {
        let card = vec![question(&["6", "7"]), question(&["6", "8"])];
        assert_eq!(labels(&available_scores(&card)), vec!["6", "7", "8"]);
    }

    #[test]
    fn test_available_scores_numeric_not_lexicographic() {
        let card = vec![question(&["60", "7", "6.5"]), question(&["6", "10"])];
        assert_eq!(
            labels(&available_scores(&card)),
            vec!["6", "6.5", "7", "10", "60"]
        );
    }

    #[test]
    fn test_available_scores_non_numeric_last() {
        let card = vec![question(&["band B", "7", "band A"])];
        assert_eq!(
            labels(&available_scores(&card)),
            vec!["7", "band A", "band B"]
        );
    }

    #[test]
    fn test_available_scores_empty_card() {
        assert!(available_scores(&[]).is_empty());
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(ScoreLabel::from("6.5").numeric(), Some(6.5));
        assert_eq!(ScoreLabel::from(" 7 ").numeric(), Some(7.0));
        assert_eq!(ScoreLabel::from("seven").numeric(), None);
        assert_eq!(ScoreLabel::from("NaN").numeric(), None);
    }

    #[test]
    fn test_ordering_consistent_with_equality() {
        let six = ScoreLabel::from("6");
        let six_point_zero = ScoreLabel::from("6.0");
        assert_ne!(six.cmp(&six_point_zero), Ordering::Equal);
        assert_eq!(six.cmp(&six.clone()), Ordering::Equal);
    }

    #[test]
    fn test_default_label() {
        assert_eq!(ScoreLabel::default().as_str(), "6.5");
    }

    #[test]
    fn test_serde_transparent() {
        let label: ScoreLabel = serde_json::from_str(r#""7.5""#).unwrap();
        assert_eq!(label.as_str(), "7.5");
        assert_eq!(serde_json::to_string(&label).unwrap(), r#""7.5""#);
    }
}
