//! Sample answer data model
//!
//! Question/answer records as they arrive from the content catalog. These are
//! immutable once loaded; everything downstream borrows from them.

use super::score::{select_version, ScoreLabel};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Analysis Annotations
// ─────────────────────────────────────────────────────────────────────────────

/// What an analysis annotation highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    #[serde(alias = "vocabulary")]
    Vocab,
    Phrase,
    Sentence,
}

impl AnnotationKind {
    /// Get the display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Vocab => "Vocabulary",
            AnnotationKind::Phrase => "Phrase",
            AnnotationKind::Sentence => "Sentence",
        }
    }
}

/// An explanation attached to a word, phrase or sentence of an answer.
///
/// Annotations are shown next to the rendered answer and never take part in
/// the plain-text export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type", alias = "kind")]
    pub kind: AnnotationKind,
    pub text: String,
    pub explanation: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Answer Body
// ─────────────────────────────────────────────────────────────────────────────

/// The stored text of one answer version.
///
/// A `Raw` body is a single blob that may hold role markers, `<br><br>`
/// paragraph separators and inline tags. A `Fragments` body has already been
/// split into paragraphs by the author and is used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerBody {
    Raw(String),
    Fragments(Vec<String>),
}

impl From<&str> for AnswerBody {
    fn from(text: &str) -> Self {
        AnswerBody::Raw(text.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Versions and Questions
// ─────────────────────────────────────────────────────────────────────────────

/// One score-tier rendering of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVersion {
    pub score: ScoreLabel,
    pub answer: AnswerBody,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analysis: Vec<Annotation>,
}

impl AnswerVersion {
    pub fn new(score: impl Into<ScoreLabel>, answer: impl Into<AnswerBody>) -> Self {
        Self {
            score: score.into(),
            answer: answer.into(),
            analysis: Vec::new(),
        }
    }

    /// Attach analysis annotations (builder style).
    pub fn with_analysis(mut self, analysis: Vec<Annotation>) -> Self {
        self.analysis = analysis;
        self
    }
}

/// A question together with its answer versions, one per score label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleAnswer {
    pub question: String,
    #[serde(default)]
    pub versions: Vec<AnswerVersion>,
}

impl SampleAnswer {
    pub fn new(question: impl Into<String>, versions: Vec<AnswerVersion>) -> Self {
        Self {
            question: question.into(),
            versions,
        }
    }

    /// The version written for `score`, if there is one.
    pub fn version_at(&self, score: &ScoreLabel) -> Option<&AnswerVersion> {
        select_version(&self.versions, score)
    }

    /// Check that no two versions share a score label.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for version in &self.versions {
            if !seen.insert(version.score.as_str()) {
                return Err(Error::DuplicateScore {
                    question: self.question.clone(),
                    score: version.score.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_body_from_json_string() {
        let version: AnswerVersion =
            serde_json::from_str(r#"{"score": "6.5", "answer": "Yes, I do."}"#).unwrap();
        assert_eq!(version.answer, AnswerBody::Raw("Yes, I do.".to_string()));
        assert!(version.analysis.is_empty());
    }

    #[test]
    fn test_fragment_body_from_json_array() {
        let version: AnswerVersion =
            serde_json::from_str(r#"{"score": "7", "answer": ["First.", "Second."]}"#).unwrap();
        assert_eq!(
            version.answer,
            AnswerBody::Fragments(vec!["First.".to_string(), "Second.".to_string()])
        );
    }

    #[test]
    fn test_annotation_accepts_type_field() {
        let json = r#"{"type": "vocab", "text": "independent", "explanation": "self-reliant"}"#;
        let note: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(note.kind, AnnotationKind::Vocab);

        let json = r#"{"kind": "vocabulary", "text": "groom", "explanation": "clean"}"#;
        let note: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(note.kind, AnnotationKind::Vocab);
    }

    #[test]
    fn test_validate_rejects_duplicate_scores() {
        let qa = SampleAnswer::new(
            "Do you like cats?",
            vec![AnswerVersion::new("6", "a"), AnswerVersion::new("6", "b")],
        );
        assert!(matches!(
            qa.validate(),
            Err(Error::DuplicateScore { score, .. }) if score == "6"
        ));
    }

    #[test]
    fn test_validate_accepts_unique_scores() {
        let qa = SampleAnswer::new(
            "Do you like cats?",
            vec![AnswerVersion::new("6", "a"), AnswerVersion::new("7", "b")],
        );
        assert!(qa.validate().is_ok());
    }

    #[test]
    fn test_version_at() {
        let qa = SampleAnswer::new(
            "Do you like cats?",
            vec![AnswerVersion::new("6", "six"), AnswerVersion::new("7", "seven")],
        );
        let found = qa.version_at(&ScoreLabel::from("7")).unwrap();
        assert_eq!(found.answer, AnswerBody::from("seven"));
        assert!(qa.version_at(&ScoreLabel::from("8")).is_none());
    }
}
