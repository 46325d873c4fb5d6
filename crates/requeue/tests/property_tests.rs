//! Property-based tests for the queue reset.
//!
//! Property-based tests verify:
//! 1. **No header, no change**: text without a queue header is never rewritten
//! 2. **Only posted rows move**: every other row keeps its exact bytes
//! 3. **Idempotence**: a second pass never changes anything
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p requeue --test property_tests
//! PROPTEST_CASES=10000 cargo test -p requeue --test property_tests
//! ```

use proptest::prelude::*;

use requeue::{ColumnLayout, QueueText, RowRewriter};
use requeue::schema::{detect_header, DEFAULT_HEADER_WINDOW};

const HEADER: &str = "id\tstatus\tplatform\tposted_at\tig_media_id\n";

// =============================================================================
// Test Strategies
// =============================================================================

/// Status values, including near misses of `posted`.
fn status_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("posted".to_string()),
        Just(" Posted ".to_string()),
        Just("POSTED".to_string()),
        Just("ready".to_string()),
        Just("pending".to_string()),
        Just("failed".to_string()),
        Just("".to_string()),
        Just("reposted".to_string()),
        "[a-z]{0,8}",
    ]
}

/// A data row in the header's shape: id, status, platform, posted_at, media id.
fn queue_row() -> impl Strategy<Value = String> {
    (
        "[0-9]{1,4}",
        status_value(),
        "[a-z]{1,10}",
        "(2024-[0-9]{2}-[0-9]{2})?",
        "[0-9]{0,8}",
    )
        .prop_map(|(id, status, platform, at, media)| {
            format!("{id}\t{status}\t{platform}\t{at}\t{media}\n")
        })
}

/// Lines that can never be a queue header: no `i` means no `id`.
fn non_header_line() -> impl Strategy<Value = String> {
    "[a-hj-zA-HJ-Z0-9 ,\t]{0,40}\n"
}

fn rewrite(lines: &mut [String]) -> usize {
    let layout = ColumnLayout::from_header(HEADER).unwrap();
    RowRewriter::new(&layout, "ready").rewrite(lines)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn header_less_text_has_no_header(lines in prop::collection::vec(non_header_line(), 0..40)) {
        prop_assert!(detect_header(&lines, DEFAULT_HEADER_WINDOW).is_none());
    }

    #[test]
    fn only_posted_rows_change(rows in prop::collection::vec(queue_row(), 0..30)) {
        let mut lines = rows.clone();
        let count = rewrite(&mut lines);

        let mut expected = 0;
        for (before, after) in rows.iter().zip(&lines) {
            let status = before.split('\t').nth(1).unwrap().trim().to_lowercase();
            if status == "posted" {
                expected += 1;
                let fields: Vec<_> = after.trim_end_matches('\n').split('\t').collect();
                prop_assert_eq!(fields[1], "ready");
                prop_assert_eq!(fields[3], "");
                prop_assert_eq!(fields[4], "");
                prop_assert_eq!(fields[0], before.split('\t').next().unwrap());
            } else {
                prop_assert_eq!(before, after);
            }
        }
        prop_assert_eq!(count, expected);
    }

    #[test]
    fn rewrite_is_idempotent(rows in prop::collection::vec(queue_row(), 0..30)) {
        let mut lines = rows;
        rewrite(&mut lines);
        let once = lines.clone();

        prop_assert_eq!(rewrite(&mut lines), 0);
        prop_assert_eq!(lines, once);
    }

    #[test]
    fn line_split_round_trips(text in "[a-z\t,\r\n]{0,200}") {
        prop_assert_eq!(QueueText::from_text(&text).to_text(), text);
    }
}
