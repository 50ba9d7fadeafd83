//! Answer export for cuecard
//!
//! This module turns selected answer versions into copy-ready plain text and
//! places it on the clipboard.
//!
//! # Architecture
//!
//! - `numbering.rs` - Question label strategies
//! - `format.rs` - Export blocks and "copy all" concatenation
//! - `clipboard.rs` - Clipboard capability and the arboard implementation
//! - `controller.rs` - Per-item copy acknowledgment state machine

pub mod clipboard;
pub mod controller;
pub mod format;
pub mod numbering;

pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use controller::{CopyController, CopyOutcome, CopyStatus, CopyTarget, ACKNOWLEDGMENT_DURATION};
pub use format::{format_block, render_body, ExportFormatter};
pub use numbering::{sequential_label, NumberingStyle, QuestionNumbering};
