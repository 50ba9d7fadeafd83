//! Answer view model
//!
//! `AnswerView` is everything a presentation layer needs to show one card's
//! sample answers: the score buttons, the active score, the rendered
//! segments for each question, and the copy actions with their
//! acknowledgment state. It does no layout of its own.

use crate::answer::{
    available_scores, segment_answer, Annotation, MarkerClassifier, SampleAnswer, ScoreLabel,
    Segmentation,
};
use crate::export::{
    ClipboardWriter, CopyController, CopyOutcome, CopyStatus, CopyTarget, ExportFormatter,
    NumberingStyle, QuestionNumbering,
};
use log::debug;
use serde::Serialize;
use std::time::Instant;

// ─────────────────────────────────────────────────────────────────────────────
// Rendered Output
// ─────────────────────────────────────────────────────────────────────────────

/// What is shown for one question at the active score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerContent<'a> {
    /// The question has no version at this score
    Missing,
    /// The version's segments and its analysis annotations
    Present {
        segmentation: Segmentation,
        analysis: &'a [Annotation],
    },
}

/// One question as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedAnswer<'a> {
    pub index: usize,
    pub label: String,
    pub content: AnswerContent<'a>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Answer View
// ─────────────────────────────────────────────────────────────────────────────

/// View model for one card's sample answers.
pub struct AnswerView<'a, C> {
    answers: &'a [SampleAnswer],
    scores: Vec<ScoreLabel>,
    selected: ScoreLabel,
    classifier: MarkerClassifier,
    numbering: Box<dyn QuestionNumbering + 'a>,
    controller: CopyController<C>,
}

impl<'a, C: ClipboardWriter> AnswerView<'a, C> {
    /// Open `answers` at `initial_score`.
    ///
    /// The initial score is used as given, even if no question has a version
    /// for it.
    pub fn new(answers: &'a [SampleAnswer], initial_score: ScoreLabel, clipboard: C) -> Self {
        Self {
            answers,
            scores: available_scores(answers),
            selected: initial_score,
            classifier: MarkerClassifier::default(),
            numbering: Box::new(NumberingStyle::Sequential),
            controller: CopyController::new(clipboard),
        }
    }

    /// Use a different question numbering strategy (builder style).
    pub fn with_numbering(mut self, numbering: impl QuestionNumbering + 'a) -> Self {
        self.numbering = Box::new(numbering);
        self
    }

    /// Use a different role vocabulary (builder style).
    pub fn with_classifier(mut self, classifier: MarkerClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn answers(&self) -> &'a [SampleAnswer] {
        self.answers
    }

    /// Scores offered for selection, ascending.
    pub fn available_scores(&self) -> &[ScoreLabel] {
        &self.scores
    }

    pub fn selected_score(&self) -> &ScoreLabel {
        &self.selected
    }

    /// Switch the active score.
    ///
    /// Every copy acknowledgment is cleared when the score actually changes.
    /// Returns whether it changed.
    pub fn select_score(&mut self, score: ScoreLabel) -> bool {
        if score == self.selected {
            return false;
        }
        debug!("Score selection {} -> {}", self.selected, score);
        self.selected = score;
        self.controller.reset_all();
        true
    }

    fn formatter(&self) -> ExportFormatter<'_> {
        ExportFormatter::new(&self.classifier, self.numbering.as_ref())
    }

    /// Render every question at the active score, placeholders included.
    pub fn render(&self) -> Vec<RenderedAnswer<'a>> {
        let formatter = self.formatter();
        let answers: &'a [SampleAnswer] = self.answers;
        answers
            .iter()
            .enumerate()
            .map(|(index, qa)| {
                let content = qa
                    .version_at(&self.selected)
                    .map(|version| {
                        (
                            segment_answer(&version.answer, &self.classifier),
                            version.analysis.as_slice(),
                        )
                    })
                    .filter(|(segmentation, _)| !segmentation.is_empty())
                    .map_or(AnswerContent::Missing, |(segmentation, analysis)| {
                        AnswerContent::Present {
                            segmentation,
                            analysis,
                        }
                    });
                RenderedAnswer {
                    index,
                    label: formatter.question_label(index, &qa.question),
                    content,
                }
            })
            .collect()
    }

    /// Export text for one question at the active score.
    pub fn export_question(&self, index: usize) -> Option<String> {
        let qa = self.answers.get(index)?;
        self.formatter().export_answer(index, qa, &self.selected)
    }

    /// Export text for every question at the active score.
    pub fn export_all(&self) -> Option<String> {
        self.formatter().export_all(self.answers, &self.selected)
    }

    /// Copy one question's export to the clipboard.
    pub fn copy_question(&mut self, index: usize, now: Instant) -> CopyOutcome {
        self.copy(CopyTarget::Question(index), now)
    }

    /// Copy the whole card's export to the clipboard.
    pub fn copy_all(&mut self, now: Instant) -> CopyOutcome {
        self.copy(CopyTarget::All, now)
    }

    fn copy(&mut self, target: CopyTarget, now: Instant) -> CopyOutcome {
        if !self.controller.is_enabled(target) {
            return CopyOutcome::Disabled;
        }
        let text = match target {
            CopyTarget::Question(index) => self.export_question(index),
            CopyTarget::All => self.export_all(),
        };
        match text {
            Some(text) => self.controller.copy(target, &text, now),
            None => {
                debug!("Nothing to copy for {} at score {}", target, self.selected);
                CopyOutcome::NothingToCopy
            }
        }
    }

    /// Expire acknowledgments due at `now`.
    pub fn poll(&mut self, now: Instant) -> usize {
        self.controller.poll(now)
    }

    pub fn status(&self, target: CopyTarget) -> CopyStatus {
        self.controller.status(target)
    }

    pub fn controller(&self) -> &CopyController<C> {
        &self.controller
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
