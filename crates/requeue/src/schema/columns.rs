//! Column layout derived from a queue header.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{Row, Separator};

/// Column holding the row status.
pub const STATUS_COLUMN: &str = "status";

/// Exact column names cleared on reset.
const POSTED_AT_COLUMNS: &[&str] = &["posted_at", "postedat"];

// Platform identifiers: fb_post_id, ig_media_id, tweet_id, ...
static PLATFORM_ID_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(post_id|media_id|tweet_id)$").unwrap());

/// Whether a lowercased column name is cleared when its row is reset.
pub fn is_clearable(name: &str) -> bool {
    POSTED_AT_COLUMNS.contains(&name) || PLATFORM_ID_COLUMN.is_match(name)
}

/// Column positions for one queue file.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    /// Separator inferred for the header line.
    pub separator: Separator,
    /// Lowercased, trimmed column name to position. Later duplicates win.
    pub index: IndexMap<String, usize>,
    /// Number of columns in the header.
    pub width: usize,
    /// Position of the status column.
    pub status: usize,
    /// Positions blanked when a row is reset.
    pub clearable: Vec<usize>,
}

impl ColumnLayout {
    /// Build the layout from a header line.
    ///
    /// Returns `None` when no column is named `status`.
    pub fn from_header(line: &str) -> Option<Self> {
        let header = Row::parse(line);

        let mut index = IndexMap::new();
        for (position, name) in header.fields.iter().enumerate() {
            index.insert(name.trim().to_lowercase(), position);
        }

        let status = *index.get(STATUS_COLUMN)?;

        let mut clearable = Vec::new();
        for name in &header.fields {
            let name = name.trim().to_lowercase();
            if !is_clearable(&name) {
                continue;
            }
            if let Some(&position) = index.get(&name) {
                if !clearable.contains(&position) {
                    clearable.push(position);
                }
            }
        }

        Some(Self {
            separator: header.separator,
            index,
            width: header.fields.len(),
            status,
            clearable,
        })
    }

    /// Whether a row has this layout's separator and enough fields.
    pub fn fits(&self, row: &Row) -> bool {
        row.separator == self.separator && row.fields.len() >= self.width
    }
}
