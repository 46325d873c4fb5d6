//! Fuzz target for the front-matter reset.

#![no_main]

use libfuzzer_sys::fuzz_target;
use requeue::reset::reset_front_matter;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(updated) = reset_front_matter(text, "ready") {
            assert!(updated.starts_with("---"));
        }
    }
});
