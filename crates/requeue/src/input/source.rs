//! Queue file contents held in memory as terminated lines.

use std::fs;
use std::path::Path;

use crate::error::{RequeueError, Result};

/// A queue file read fully into memory.
///
/// Each line keeps its original terminator so untouched lines are written
/// back exactly as they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueText {
    /// Lines including their terminators (`\n`, `\r\n` or `\r`).
    pub lines: Vec<String>,
}

impl QueueText {
    /// Read a file, replacing undecodable bytes with U+FFFD.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| RequeueError::io(path, e))?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Decode bytes lossily and split them into terminated lines.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(&String::from_utf8_lossy(bytes))
    }

    /// Split text into lines, keeping each line's terminator.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        let bytes = text.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    lines.push(text[start..=i].to_string());
                    start = i + 1;
                }
                b'\r' => {
                    let end = if bytes.get(i + 1) == Some(&b'\n') { i + 1 } else { i };
                    lines.push(text[start..=end].to_string());
                    i = end;
                    start = end + 1;
                }
                _ => {}
            }
            i += 1;
        }

        if start < text.len() {
            lines.push(text[start..].to_string());
        }

        Self { lines }
    }

    /// Whether the file had no content at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reassemble the full file contents.
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Write the contents back to `path` in a single write.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|e| RequeueError::io(path, e))
    }
}

/// Strip one trailing line terminator, if present.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_terminators() {
        let text = QueueText::from_text("a\nb\r\nc\rd");
        assert_eq!(text.lines, vec!["a\n", "b\r\n", "c\r", "d"]);
        assert_eq!(text.to_text(), "a\nb\r\nc\rd");
    }

    #[test]
    fn test_split_empty() {
        assert!(QueueText::from_text("").is_empty());
    }

    #[test]
    fn test_split_trailing_newline_has_no_empty_tail() {
        let text = QueueText::from_text("a\n\n");
        assert_eq!(text.lines, vec!["a\n", "\n"]);
    }

    #[test]
    fn test_lossy_decode() {
        let text = QueueText::from_bytes(b"id\xff\n");
        assert_eq!(text.lines, vec!["id\u{FFFD}\n"]);
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("a\r\n"), "a");
        assert_eq!(strip_terminator("a\n"), "a");
        assert_eq!(strip_terminator("a\r"), "a");
        assert_eq!(strip_terminator("a"), "a");
    }
}
