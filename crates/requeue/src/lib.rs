//! requeue: reset posted rows in posting-queue files.
//!
//! A posting queue is a directory of small tab- or comma-separated tables,
//! each with a header naming at least a `status` and a platform column.
//! Rows whose status is `posted` are put back to a pending value and their
//! post metadata (`posted_at`, `*_post_id`, `*_media_id`, `*_tweet_id`) is
//! cleared, so the queue can be replayed.
//!
//! # Core Principles
//!
//! - **Conservative**: files without a recognisable header, and rows that do
//!   not match the header's shape, are never touched
//! - **Minimal writes**: a file is rewritten only if a row actually changed
//! - **Isolated failures**: an unreadable file is reported and skipped
//!
//! # Example
//!
//! ```no_run
//! use requeue::{ResetConfig, Resetter};
//!
//! let resetter = Resetter::with_config(ResetConfig::new().with_root("posts"));
//! let report = resetter.run().unwrap();
//!
//! println!("Files changed: {}", report.files_changed());
//! ```

pub mod error;
pub mod input;
pub mod reset;
pub mod schema;

mod resetter;

pub use crate::resetter::{ResetConfig, Resetter, DEFAULT_RESET_TO, DEFAULT_ROOT};
pub use error::{RequeueError, Result};
pub use input::{QueueText, Row, Separator};
pub use reset::{FileOutcome, FileReport, QueueFormat, RowRewriter, RunReport};
pub use schema::{ColumnLayout, HeaderMatch};
