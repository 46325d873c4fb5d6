//! Main Resetter struct and public API.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{RequeueError, Result};
use crate::input::{discover_candidates, QueueText};
use crate::reset::{
    reset_front_matter, FileOutcome, FileReport, QueueFormat, RowRewriter, RunReport,
};
use crate::schema::{detect_header, ColumnLayout, DEFAULT_HEADER_WINDOW};

/// Default queue directory, relative to the working directory.
pub const DEFAULT_ROOT: &str = "posts";

/// Default status written into reset rows.
pub const DEFAULT_RESET_TO: &str = "ready";

/// Configuration for a reset run.
#[derive(Debug, Clone)]
pub struct ResetConfig {
    /// Directory scanned for queue files.
    pub root: PathBuf,
    /// Status written in place of `posted`.
    pub reset_to: String,
    /// Number of leading lines searched for a header.
    pub header_window: usize,
    /// Evaluate and report without writing.
    pub dry_run: bool,
    /// Also reset Markdown front-matter posts.
    pub frontmatter: bool,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            reset_to: DEFAULT_RESET_TO.to_string(),
            header_window: DEFAULT_HEADER_WINDOW,
            dry_run: false,
            frontmatter: false,
        }
    }
}

impl ResetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_reset_to(mut self, value: impl Into<String>) -> Self {
        self.reset_to = value.into();
        self
    }

    pub fn with_header_window(mut self, lines: usize) -> Self {
        self.header_window = lines;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_frontmatter(mut self, frontmatter: bool) -> Self {
        self.frontmatter = frontmatter;
        self
    }

    /// Check that the configuration cannot corrupt a queue file.
    pub fn validate(&self) -> Result<()> {
        if self.reset_to.trim().is_empty() {
            return Err(RequeueError::Config("reset value must not be empty".to_string()));
        }
        if self.reset_to.contains(['\t', ',', '\n', '\r']) {
            return Err(RequeueError::Config(format!(
                "reset value '{}' must not contain a tab, comma or line break",
                self.reset_to.escape_debug()
            )));
        }
        if self.header_window == 0 {
            return Err(RequeueError::Config(
                "header window must be at least one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resets posted entries in every queue file under a root directory.
pub struct Resetter {
    config: ResetConfig,
}

impl Resetter {
    /// Create a resetter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ResetConfig::default())
    }

    /// Create a resetter with custom configuration.
    pub fn with_config(config: ResetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResetConfig {
        &self.config
    }

    /// Process every candidate file under the root.
    pub fn run(&self) -> Result<RunReport> {
        self.run_with(|_| {})
    }

    /// Like [`Resetter::run`], calling `on_file` as each file is finished.
    ///
    /// Per-file failures are recorded in the report and never abort the run.
    /// The only error returned is an invalid configuration.
    pub fn run_with<F>(&self, mut on_file: F) -> Result<RunReport>
    where
        F: FnMut(&FileReport),
    {
        self.config.validate()?;

        let started_at = Utc::now();
        let root = &self.config.root;
        let root_found = root.exists();
        let mut files = Vec::new();

        if root_found {
            for path in discover_candidates(root) {
                let outcome = self.reset_file(&path);
                match &outcome {
                    FileOutcome::Reset { rows, .. } => {
                        info!(
                            path = %path.display(),
                            rows,
                            dry_run = self.config.dry_run,
                            "reset queue file"
                        );
                    }
                    FileOutcome::Failed { message } => {
                        debug!(path = %path.display(), %message, "failed to process file");
                    }
                    other => {
                        debug!(
                            path = %path.display(),
                            outcome = other.label(),
                            "left file untouched"
                        );
                    }
                }

                let report = FileReport { path, outcome };
                on_file(&report);
                files.push(report);
            }
        } else {
            info!(root = %root.display(), "queue root not found");
        }

        Ok(RunReport {
            root: root.clone(),
            root_found,
            reset_to: self.config.reset_to.clone(),
            dry_run: self.config.dry_run,
            started_at,
            finished_at: Utc::now(),
            files,
        })
    }

    /// Reset a single file, capturing any IO failure in the outcome.
    pub fn reset_file(&self, path: impl AsRef<Path>) -> FileOutcome {
        match self.try_reset_file(path.as_ref()) {
            Ok(outcome) => outcome,
            Err(e) => FileOutcome::Failed {
                message: failure_message(&e),
            },
        }
    }

    fn try_reset_file(&self, path: &Path) -> Result<FileOutcome> {
        let mut text = QueueText::read(path)?;
        if text.is_empty() {
            return Ok(FileOutcome::NotQueue);
        }

        let Some(header) = detect_header(&text.lines, self.config.header_window) else {
            return self.try_reset_front_matter(path, &text);
        };
        let header_index = header.index;

        let Some(layout) = ColumnLayout::from_header(header.line) else {
            debug!(
                path = %path.display(),
                line = header_index + 1,
                "header has no status column"
            );
            return Ok(FileOutcome::NotQueue);
        };

        let rewriter = RowRewriter::new(&layout, &self.config.reset_to);
        let rows = rewriter.rewrite(&mut text.lines[header_index + 1..]);
        if rows == 0 {
            return Ok(FileOutcome::Unchanged);
        }

        if !self.config.dry_run {
            text.write(path)?;
        }

        Ok(FileOutcome::Reset {
            format: QueueFormat::Table,
            rows,
        })
    }

    fn try_reset_front_matter(&self, path: &Path, text: &QueueText) -> Result<FileOutcome> {
        let is_markdown = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);

        if !self.config.frontmatter || !is_markdown {
            return Ok(FileOutcome::NotQueue);
        }

        let Some(updated) = reset_front_matter(&text.to_text(), &self.config.reset_to) else {
            return Ok(FileOutcome::NotQueue);
        };

        if !self.config.dry_run {
            fs::write(path, updated).map_err(|e| RequeueError::io(path, e))?;
        }

        Ok(FileOutcome::Reset {
            format: QueueFormat::FrontMatter,
            rows: 1,
        })
    }
}

impl Default for Resetter {
    fn default() -> Self {
        Self::new()
    }
}

/// Message shown for a failed file. The path is reported separately.
fn failure_message(error: &RequeueError) -> String {
    match error {
        RequeueError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResetConfig::default();
        assert_eq!(config.root, PathBuf::from("posts"));
        assert_eq!(config.reset_to, "ready");
        assert_eq!(config.header_window, 30);
        assert!(!config.dry_run);
        assert!(!config.frontmatter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_separator_in_reset_value() {
        assert!(ResetConfig::new().with_reset_to("a,b").validate().is_err());
        assert!(ResetConfig::new().with_reset_to("a\tb").validate().is_err());
        assert!(ResetConfig::new().with_reset_to("a\nb").validate().is_err());
        assert!(ResetConfig::new().with_reset_to("  ").validate().is_err());
        assert!(ResetConfig::new().with_reset_to("pending").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = ResetConfig::new().with_header_window(0);
        assert!(matches!(config.validate(), Err(RequeueError::Config(_))));
    }

    #[test]
    fn test_failure_message_omits_path() {
        let error = RequeueError::io(
            "posts/q.tsv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(failure_message(&error), "denied");
    }

    #[test]
    fn test_missing_file_is_failure() {
        let resetter = Resetter::new();
        let outcome = resetter.reset_file("/nonexistent/requeue/queue.tsv");
        assert!(outcome.is_failed());
    }
}
