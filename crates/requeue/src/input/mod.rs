//! Input handling: discovery, file contents, and row parsing.

mod discovery;
mod row;
mod source;

pub use discovery::{discover_candidates, is_candidate, CANDIDATE_EXTENSIONS};
pub use row::{Row, Separator};
pub use source::{strip_terminator, QueueText};
