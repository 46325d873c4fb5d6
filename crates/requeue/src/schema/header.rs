//! Heuristic queue header detection.

/// Default number of leading lines searched for a header.
pub const DEFAULT_HEADER_WINDOW: usize = 30;

/// A header line found near the top of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// The raw line, terminator included.
    pub line: &'a str,
}

/// Whether a line looks like a queue header.
///
/// Plain substring containment of `status`, `platform` and `id`, so prose
/// that happens to mention all three is matched too.
pub fn is_queue_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("status") && lower.contains("platform") && lower.contains("id")
}

/// Find the first header within the first `window` lines.
pub fn detect_header<S: AsRef<str>>(lines: &[S], window: usize) -> Option<HeaderMatch<'_>> {
    lines
        .iter()
        .take(window)
        .map(|line| line.as_ref())
        .enumerate()
        .find(|(_, line)| is_queue_header(line))
        .map(|(index, line)| HeaderMatch { index, line })
}
