//! Naive delimited row parsing.
//!
//! Rows are split on the literal delimiter character. Quoting, escaping and
//! embedded delimiters are not supported.

use super::source::strip_terminator;

/// Field separator inferred for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Tab,
    Comma,
}

impl Separator {
    /// Tab if the line contains a tab, comma otherwise.
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            Separator::Tab
        } else {
            Separator::Comma
        }
    }

    /// The delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Separator::Tab => '\t',
            Separator::Comma => ',',
        }
    }
}

/// A single parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Separator inferred for this line.
    pub separator: Separator,
    /// Fields in order, untrimmed.
    pub fields: Vec<String>,
}

impl Row {
    /// Parse a line, dropping its terminator before splitting.
    pub fn parse(line: &str) -> Self {
        let separator = Separator::detect(line);
        let fields = strip_terminator(line)
            .split(separator.as_char())
            .map(str::to_string)
            .collect();

        Self { separator, fields }
    }

    /// Serialize back to a line. Always terminated with `\n`.
    pub fn to_line(&self) -> String {
        let mut line = self.fields.join(&self.separator.as_char().to_string());
        line.push('\n');
        line
    }
}
