//! Resetting posted entries and reporting what changed.

mod frontmatter;
mod outcome;
mod rewriter;

pub use frontmatter::reset_front_matter;
pub use outcome::{FileOutcome, FileReport, QueueFormat, RunReport};
pub use rewriter::{RowRewriter, POSTED_STATUS};
