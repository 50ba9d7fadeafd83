//! Segments: classified units of answer text
//!
//! An answer is segmented exactly once, by one of two strategies chosen
//! from its content:
//!
//! - **Role-marked**: the text contains at least one `(Role)` marker, so
//!   every span is tagged with its rhetorical role.
//! - **Paragraphed**: no markers, so the text is split on double line breaks
//!   (or taken fragment by fragment if the author pre-segmented it).
//!
//! Role-marked mode takes precedence: a marked answer is never re-split into
//! paragraphs, even when a span contains `<br><br>`.

use super::markers::MarkerClassifier;
use super::model::{AnswerBody, Annotation};
use super::paragraphs::{paragraphs_from_fragments, split_paragraphs};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Roles
// ─────────────────────────────────────────────────────────────────────────────

/// Rhetorical role of a span of answer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Point,
    Reason,
    Example,
    Contrast,
    Conclusion,
}

impl Role {
    /// Role given to text that precedes the first marker.
    pub const IMPLICIT: Role = Role::Point;

    /// Get the marker name of the role, as written inside `(...)`.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Point => "Point",
            Role::Reason => "Reason",
            Role::Example => "Example",
            Role::Contrast => "Contrast",
            Role::Conclusion => "Conclusion",
        }
    }

    /// First letter of the role name, used as the export prefix.
    ///
    /// Contrast and Conclusion share `C`.
    pub fn initial(&self) -> char {
        match self {
            Role::Point => 'P',
            Role::Reason => 'R',
            Role::Example => 'E',
            Role::Contrast | Role::Conclusion => 'C',
        }
    }

    /// Look a role up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get all roles.
    pub fn all() -> &'static [Role] {
        &[
            Role::Point,
            Role::Reason,
            Role::Example,
            Role::Contrast,
            Role::Conclusion,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Segment
// ─────────────────────────────────────────────────────────────────────────────

/// One unit of clean answer text, optionally tagged with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub text: String,
}

impl Segment {
    /// A plain paragraph with no role.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            role: None,
            text: text.into(),
        }
    }

    pub fn with_role(role: Role, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            text: text.into(),
        }
    }

    /// Annotations whose surface text occurs in this segment (ignoring case),
    /// in their original order.
    pub fn annotations<'a>(&self, analysis: &'a [Annotation]) -> Vec<&'a Annotation> {
        let haystack = self.text.to_lowercase();
        analysis
            .iter()
            .filter(|note| {
                let needle = note.text.trim().to_lowercase();
                !needle.is_empty() && haystack.contains(&needle)
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Segmentation
// ─────────────────────────────────────────────────────────────────────────────

/// The segments of one answer, tagged with the strategy that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "segments", rename_all = "snake_case")]
pub enum Segmentation {
    RoleMarked(Vec<Segment>),
    Paragraphed(Vec<Segment>),
}

impl Segmentation {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Segmentation::RoleMarked(segments) | Segmentation::Paragraphed(segments) => segments,
        }
    }

    pub fn into_segments(self) -> Vec<Segment> {
        match self {
            Segmentation::RoleMarked(segments) | Segmentation::Paragraphed(segments) => segments,
        }
    }

    pub fn is_role_marked(&self) -> bool {
        matches!(self, Segmentation::RoleMarked(_))
    }

    pub fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }
}

/// Segment an answer body.
///
/// Fragment bodies are always paragraphed. Raw bodies are role-marked if the
/// classifier finds a marker, paragraphed otherwise.
pub fn segment_answer(body: &AnswerBody, classifier: &MarkerClassifier) -> Segmentation {
    match body {
        AnswerBody::Fragments(fragments) => {
            Segmentation::Paragraphed(paragraphs_from_fragments(fragments))
        }
        AnswerBody::Raw(text) => match classifier.classify(text) {
            Some(segments) => Segmentation::RoleMarked(segments),
            None => Segmentation::Paragraphed(split_paragraphs(text)),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
