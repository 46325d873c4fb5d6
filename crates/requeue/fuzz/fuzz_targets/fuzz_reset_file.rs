//! Fuzz target for resetting a single queue file.
//!
//! This fuzzer tests that a reset:
//! 1. Never panics on malformed input
//! 2. Is idempotent: a second pass leaves the file as the first left it

#![no_main]

use libfuzzer_sys::fuzz_target;
use requeue::{FileOutcome, Resetter};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(dir) = tempfile::TempDir::new() else {
        return;
    };
    let path = dir.path().join("queue.tsv");
    if std::fs::write(&path, data).is_err() {
        return;
    }

    let resetter = Resetter::new();
    let _ = resetter.reset_file(&path);

    let Ok(first) = std::fs::read(&path) else {
        return;
    };
    let second = resetter.reset_file(&path);
    assert!(!matches!(second, FileOutcome::Reset { .. }));
    assert_eq!(std::fs::read(&path).ok(), Some(first));
});
