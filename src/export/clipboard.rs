//! Clipboard access
//!
//! The copy controller only needs "write this text, tell me if it worked",
//! so the clipboard is a small trait. [`SystemClipboard`] implements it with
//! the arboard crate; tests substitute an in-memory writer.

use arboard::Clipboard;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Failed to access clipboard (no display, permission denied, ...)
    AccessError(String),
    /// Failed to set clipboard content
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::WriteError(msg) => write!(f, "Clipboard write error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::WriteError(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Capability
// ─────────────────────────────────────────────────────────────────────────────

/// Something that can receive plain text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for &mut T {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Box<T> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// The platform clipboard.
///
/// A fresh arboard handle is opened for every write, so a clipboard that
/// becomes available later (or goes away) is picked up without restarting.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_text_to_clipboard(text)
    }
}

/// Put `text` on the platform clipboard through a fresh arboard handle.
pub fn copy_text_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;

    clipboard.set_text(text)?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl ClipboardWriter for Recorder {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::AccessError("no display".to_string());
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn test_clipboard_error_write() {
        let err = ClipboardError::WriteError("write failed".to_string());
        assert!(err.to_string().contains("write failed"));
    }

    fn send<W: ClipboardWriter>(mut writer: W, text: &str) -> Result<(), ClipboardError> {
        writer.write_text(text)
    }

    #[test]
    fn test_writer_through_mut_ref_and_box() {
        let mut recorder = Recorder(Vec::new());
        send(&mut recorder, "one").unwrap();
        assert_eq!(recorder.0, vec!["one".to_string()]);

        let boxed: Box<dyn ClipboardWriter> = Box::new(Recorder(Vec::new()));
        assert!(send(boxed, "two").is_ok());
    }
}
