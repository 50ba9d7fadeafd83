//! Plain-text export formatting
//!
//! One question renders as a block:
//!
//! ```text
//! **1. Do you like cats?**
//!
//! P: Yes, I adore them.
//!
//! R: They are independent.
//! ```
//!
//! A "copy all" export joins the blocks of every question that has a version
//! at the active score with two blank lines. Questions without one are left
//! out entirely.

use super::numbering::{NumberingStyle, QuestionNumbering};
use crate::answer::{segment_answer, MarkerClassifier, SampleAnswer, ScoreLabel, Segmentation};

/// Separator between segments of one answer (one blank line).
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Separator between question blocks of a combined export (two blank lines).
pub const BLOCK_SEPARATOR: &str = "\n\n\n";

// ─────────────────────────────────────────────────────────────────────────────
// Block Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render the body of an answer.
///
/// Role-marked segments are prefixed with the role initial (`"P: ..."`);
/// paragraphs are emitted as they are.
pub fn render_body(segmentation: &Segmentation) -> String {
    match segmentation {
        Segmentation::RoleMarked(segments) => segments
            .iter()
            .map(|segment| match segment.role {
                Some(role) => format!("{}: {}", role.initial(), segment.text),
                None => segment.text.clone(),
            })
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR),
        Segmentation::Paragraphed(segments) => segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR),
    }
}

/// Render a complete export block: bold label, blank line, body.
pub fn format_block(label: &str, segmentation: &Segmentation) -> String {
    format!("**{}**\n\n{}", label, render_body(segmentation))
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Formatter
// ─────────────────────────────────────────────────────────────────────────────

/// Turns questions at a given score into copy-ready text.
pub struct ExportFormatter<'a> {
    classifier: &'a MarkerClassifier,
    numbering: &'a dyn QuestionNumbering,
}

impl<'a> ExportFormatter<'a> {
    pub fn new(classifier: &'a MarkerClassifier, numbering: &'a dyn QuestionNumbering) -> Self {
        Self {
            classifier,
            numbering,
        }
    }

    /// Formatter using [`NumberingStyle::Sequential`].
    pub fn with_default_numbering(classifier: &'a MarkerClassifier) -> Self {
        Self::new(classifier, &NumberingStyle::Sequential)
    }

    pub fn question_label(&self, index: usize, question: &str) -> String {
        self.numbering.label(index, question)
    }

    /// Export one question at `score`.
    ///
    /// Returns `None` if the question has no version at that score or the
    /// version leaves no text once segmented.
    pub fn export_answer(
        &self,
        index: usize,
        qa: &SampleAnswer,
        score: &ScoreLabel,
    ) -> Option<String> {
        let version = qa.version_at(score)?;
        let segmentation = segment_answer(&version.answer, self.classifier);
        if segmentation.is_empty() {
            return None;
        }

        let label = self.question_label(index, &qa.question);
        Some(format_block(&label, &segmentation))
    }

    /// Export every question that has a version at `score`, in order.
    ///
    /// Returns `None` when no question contributes a block.
    pub fn export_all(&self, answers: &[SampleAnswer], score: &ScoreLabel) -> Option<String> {
        let blocks: Vec<String> = answers
            .iter()
            .enumerate()
            .filter_map(|(index, qa)| self.export_answer(index, qa, score))
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some(blocks.join(BLOCK_SEPARATOR))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
