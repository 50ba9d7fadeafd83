//! Answer model and segmentation
//!
//! This module turns stored sample answers into clean, classified segments.
//!
//! # Architecture
//!
//! - `model.rs` - Question, version and annotation records
//! - `score.rs` - Score labels, version selection, available scores
//! - `markers.rs` - `(Role)` marker detection and role-tagged splitting
//! - `paragraphs.rs` - Double line-break paragraph splitting
//! - `markup.rs` - Inline tag removal
//! - `segment.rs` - Roles, segments and the segmentation strategy switch

pub mod markers;
pub mod markup;
pub mod model;
pub mod paragraphs;
pub mod score;
pub mod segment;

pub use markers::MarkerClassifier;
pub use markup::strip_markup;
pub use model::{Annotation, AnnotationKind, AnswerBody, AnswerVersion, SampleAnswer};
pub use score::{available_scores, select_version, ScoreLabel, DEFAULT_INITIAL_SCORE};
pub use segment::{segment_answer, Role, Segment, Segmentation};
