//! Clipboard sink for exported markup
//!
//! The clipboard write is fire-and-forget: success is silent, failure goes to
//! the log sink and is never retried or surfaced in-band.

use thiserror::Error;

/// Errors from writing to a clipboard sink
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Sink for the final exported text
pub trait ClipboardSink {
    /// Write text to the sink
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Write to the sink, logging failure instead of returning it
pub fn write_or_log(sink: &mut dyn ClipboardSink, text: &str) {
    if let Err(error) = sink.write_text(text) {
        log::error!("clipboard write failed: {}", error);
    }
}
