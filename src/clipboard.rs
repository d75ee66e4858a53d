//! Clipboard access for copying summaries.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to set clipboard text: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Capability to put text on a clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Fails on headless sessions with no clipboard provider.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
