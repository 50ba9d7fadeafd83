//! cuecard - structured sample answers for speaking-test cue cards
//!
//! The library turns the sample answers stored in a cue card catalog into
//! role-tagged or paragraphed segments, picks the version for a chosen score,
//! and exports it as copy-ready plain text with a timed "copied"
//! acknowledgment.
//!
//! - [`answer`] - Markers, markup stripping, paragraphs and score selection
//! - [`export`] - Export formatting, numbering, clipboard and copy state
//! - [`viewer`] - View model combining the above for one card
//! - [`catalog`] - Cue card catalog model and file loading
//! - [`config`] - User settings and their persistence
//! - [`error`] - Crate-wide error type

pub mod answer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod viewer;

pub use error::{Error, Result};
