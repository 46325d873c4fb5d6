//! Queue header detection and column layout.

mod columns;
mod header;

pub use columns::{is_clearable, ColumnLayout, STATUS_COLUMN};
pub use header::{detect_header, is_queue_header, HeaderMatch, DEFAULT_HEADER_WINDOW};
