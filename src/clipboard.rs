//! Clipboard publishing.
//!
//! The OS clipboard is process-global state outside this program's
//! ownership, so it is modelled as a [`ClipboardSink`] the caller injects.
//! Assembly logic can then be exercised in tests against an in-memory sink
//! instead of the real clipboard.

/// Destination for the assembled text.
pub trait ClipboardSink {
    /// Replace the sink's contents with `s`.
    fn set_text(&mut self, s: &str) -> Result<(), String>;
}

/// The real system clipboard, backed by the `arboard` crate.
///
/// On some platforms or in headless CI environments clipboard initialization
/// may fail — callers should treat errors as non-fatal (the CLI prints a
/// warning on failure, having already echoed the text to stdout).
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, s: &str) -> Result<(), String> {
        let mut ctx = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
        ctx.set_text(s.to_owned())
            .map_err(|e| format!("clipboard set: {}", e))
    }
}
