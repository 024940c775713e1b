// src/clipboard.rs
//! Best-effort clipboard copy. Failures are logged and swallowed; a
//! failed copy never affects engine state or propagates upward.

/// Fire-and-forget text sink. `write` reports success so a caller can
/// decide whether to show its copied notification.
pub trait ClipboardSink {
    fn write(&mut self, text: &str) -> bool;
}

/// System clipboard via arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> bool {
        let result = arboard::Clipboard::new().and_then(|mut clipboard| {
            clipboard.set_text(text.to_string())
        });
        match result {
            Ok(()) => true,
            Err(e) => {
                log::debug!("system clipboard write failed: {}", e);
                false
            }
        }
    }
}

/// Tries the primary sink, then the fallback. A double failure is logged
/// and reported as `false`, nothing more.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    text: &str,
) -> bool {
    if primary.write(text) {
        return true;
    }
    if fallback.write(text) {
        return true;
    }
    log::warn!("clipboard copy failed on both primary and fallback sinks");
    false
}
