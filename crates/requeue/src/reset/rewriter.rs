//! Row rewriting: flip `posted` rows back to the reset value.

use tracing::trace;

use crate::input::Row;
use crate::schema::ColumnLayout;

/// Status value that marks a row for reset.
pub const POSTED_STATUS: &str = "posted";

/// Rewrites the data rows that follow a queue header.
pub struct RowRewriter<'a> {
    layout: &'a ColumnLayout,
    reset_to: &'a str,
}

impl<'a> RowRewriter<'a> {
    /// Create a rewriter for one file's layout.
    pub fn new(layout: &'a ColumnLayout, reset_to: &'a str) -> Self {
        Self { layout, reset_to }
    }

    /// Rewrite the lines following the header in place.
    ///
    /// Scanning stops at the first blank line. Rows with a different
    /// separator or too few fields are left alone. Returns the number of
    /// rows that were reset.
    pub fn rewrite(&self, lines: &mut [String]) -> usize {
        let mut reset = 0;

        for (offset, line) in lines.iter_mut().enumerate() {
            if line.trim().is_empty() {
                break;
            }

            let mut row = Row::parse(line);
            if !self.layout.fits(&row) {
                trace!(
                    offset,
                    fields = row.fields.len(),
                    expected = self.layout.width,
                    "leaving malformed row untouched"
                );
                continue;
            }

            if !self.reset_row(&mut row) {
                continue;
            }

            *line = row.to_line();
            reset += 1;
        }

        reset
    }

    /// Reset a single row if its status is `posted`.
    fn reset_row(&self, row: &mut Row) -> bool {
        let Some(status) = row.fields.get_mut(self.layout.status) else {
            return false;
        };
        if status.trim().to_lowercase() != POSTED_STATUS {
            return false;
        }

        *status = self.reset_to.to_string();
        for &position in &self.layout.clearable {
            if let Some(field) = row.fields.get_mut(position) {
                field.clear();
            }
        }

        true
    }
}
