//! Clipboard fallback chain: primary first, fallback on failure, double
//! failure swallowed and reported as `false`.

use rust_keysmith::clipboard::{copy_with_fallback, ClipboardSink};

/// Sink that accepts or rejects every write and records what it saw.
struct RecordingSink {
    accepts: bool,
    written: Vec<String>,
}

impl RecordingSink {
    fn accepting() -> Self {
        Self { accepts: true, written: Vec::new() }
    }

    fn failing() -> Self {
        Self { accepts: false, written: Vec::new() }
    }
}

impl ClipboardSink for RecordingSink {
    fn write(&mut self, text: &str) -> bool {
        if self.accepts {
            self.written.push(text.to_string());
        }
        self.accepts
    }
}

#[test]
fn primary_success_skips_fallback() {
    let mut primary = RecordingSink::accepting();
    let mut fallback = RecordingSink::accepting();

    assert!(copy_with_fallback(&mut primary, &mut fallback, "s3cret"));
    assert_eq!(primary.written, vec!["s3cret"]);
    assert!(fallback.written.is_empty());
}

#[test]
fn fallback_covers_primary_failure() {
    let mut primary = RecordingSink::failing();
    let mut fallback = RecordingSink::accepting();

    assert!(copy_with_fallback(&mut primary, &mut fallback, "s3cret"));
    assert_eq!(fallback.written, vec!["s3cret"]);
}

#[test]
fn double_failure_reports_false_without_panicking() {
    let mut primary = RecordingSink::failing();
    let mut fallback = RecordingSink::failing();

    assert!(!copy_with_fallback(&mut primary, &mut fallback, "s3cret"));
    assert!(primary.written.is_empty());
    assert!(fallback.written.is_empty());
}
