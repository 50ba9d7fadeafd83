//! Rhetorical role marker classification
//!
//! Answers written in the Point/Reason/Example style carry inline markers
//! such as `(Point)` or `(reason)`. The classifier detects them and splits the
//! text into role-tagged spans.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MarkerClassifier::default();
//! let spans: Vec<_> = classifier
//!     .spans("Intro.(Reason) Because.")
//!     .collect();
//! // [(Role::Point, "Intro."), (Role::Reason, "Because.")]
//! ```

use super::markup::strip_markup;
use super::segment::{Role, Segment};
use regex::{Matches, Regex, RegexBuilder};

// ─────────────────────────────────────────────────────────────────────────────
// Classifier
// ─────────────────────────────────────────────────────────────────────────────

/// Detects `(Role)` markers drawn from a closed vocabulary.
#[derive(Debug, Clone)]
pub struct MarkerClassifier {
    roles: Vec<Role>,
    /// `None` when the vocabulary is empty; nothing is ever a marker then.
    pattern: Option<Regex>,
}

impl Default for MarkerClassifier {
    fn default() -> Self {
        Self::new(Role::all())
    }
}

impl MarkerClassifier {
    /// Create a classifier recognizing only `roles`.
    ///
    /// A marker naming a role outside this vocabulary is ordinary text.
    pub fn new(roles: &[Role]) -> Self {
        let mut vocabulary: Vec<Role> = Vec::with_capacity(roles.len());
        for role in roles {
            if !vocabulary.contains(role) {
                vocabulary.push(*role);
            }
        }

        let pattern = if vocabulary.is_empty() {
            None
        } else {
            let names: Vec<&str> = vocabulary.iter().map(Role::name).collect();
            let source = format!(r"\((?:{})\)", names.join("|"));
            Some(
                RegexBuilder::new(&source)
                    .case_insensitive(true)
                    .build()
                    .expect("role names are plain words"),
            )
        };

        Self {
            roles: vocabulary,
            pattern,
        }
    }

    /// The recognized role vocabulary.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// True if `text` contains at least one recognized marker.
    pub fn has_markers(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }

    /// Lazily split `text` at marker boundaries.
    ///
    /// Spans are trimmed but not stripped; empty spans are skipped. Text before
    /// the first marker is attributed to [`Role::IMPLICIT`].
    pub fn spans<'a>(&'a self, text: &'a str) -> MarkerSpans<'a> {
        MarkerSpans {
            text,
            markers: self.pattern.as_ref().map(|pattern| pattern.find_iter(text)),
            role: Role::IMPLICIT,
            cursor: 0,
            finished: false,
        }
    }

    /// Classify `text` into role-tagged segments with markup removed.
    ///
    /// Returns `None` when the text holds no marker, leaving it to paragraph
    /// segmentation.
    pub fn classify(&self, text: &str) -> Option<Vec<Segment>> {
        if !self.has_markers(text) {
            return None;
        }

        let segments = self
            .spans(text)
            .map(|(role, raw)| Segment::with_role(role, strip_markup(raw)))
            .filter(|segment| !segment.text.is_empty())
            .collect();
        Some(segments)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Span Iterator
// ─────────────────────────────────────────────────────────────────────────────

/// Iterator over the raw `(role, span)` pairs of a marked text.
#[derive(Debug)]
pub struct MarkerSpans<'a> {
    text: &'a str,
    markers: Option<Matches<'a, 'a>>,
    role: Role,
    cursor: usize,
    finished: bool,
}

impl<'a> Iterator for MarkerSpans<'a> {
    type Item = (Role, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let next_marker = self.markers.as_mut().and_then(Iterator::next);

            let (span_end, resume_at, next_role) = match next_marker {
                Some(marker) => {
                    let name = marker.as_str().trim_start_matches('(').trim_end_matches(')');
                    (marker.start(), marker.end(), Role::from_name(name))
                }
                None => {
                    self.finished = true;
                    (self.text.len(), self.text.len(), None)
                }
            };

            let span = self.text[self.cursor..span_end].trim();
            let role = self.role;
            self.cursor = resume_at;
            if let Some(next_role) = next_role {
                self.role = next_role;
            }

            if !span.is_empty() {
                return Some((role, span));
            }
        }
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
