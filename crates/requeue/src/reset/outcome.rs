//! Per-file outcomes and the aggregated run report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the file was recognised as a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueFormat {
    /// Delimited table with a heuristic header row.
    Table,
    /// Markdown front-matter block.
    FrontMatter,
}

/// Result of processing a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// At least one posted entry was reset and the file rewritten
    /// (or would have been, in a dry run).
    Reset { format: QueueFormat, rows: usize },
    /// A queue file with nothing to reset. Not written.
    Unchanged,
    /// No header in the search window, or no status column.
    NotQueue,
    /// Reading or writing failed.
    Failed { message: String },
}

impl FileOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, FileOutcome::Reset { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }

    /// Short label for logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            FileOutcome::Reset { .. } => "reset",
            FileOutcome::Unchanged => "unchanged",
            FileOutcome::NotQueue => "not a queue",
            FileOutcome::Failed { .. } => "failed",
        }
    }
}

/// Outcome for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// Whether the root directory existed.
    pub root_found: bool,
    /// Status written into reset rows.
    pub reset_to: String,
    /// Whether writes were suppressed.
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// One entry per candidate file, in processing order.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Number of files that were (or would be) rewritten.
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_reset()).count()
    }

    /// Total rows or front-matter blocks reset across all files.
    pub fn rows_reset(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.outcome {
                FileOutcome::Reset { rows, .. } => rows,
                _ => 0,
            })
            .sum()
    }

    /// Files that failed to process.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome.is_failed())
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
