//! Reset for Markdown posts that keep their status in front matter.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

const DELIMITER: &str = "---";

static POSTED_STATUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"status:\s*posted").unwrap());

static POSTED_AT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^posted_at:.*(\r?\n)?").unwrap());

static POST_ID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^.*_post_id:.*(\r?\n)?").unwrap());

/// Reset a `status: posted` front-matter block.
///
/// Returns the rewritten document, or `None` if the text has no front
/// matter or its status is not `posted`. The body after the closing
/// delimiter is left untouched.
pub fn reset_front_matter(text: &str, reset_to: &str) -> Option<String> {
    let rest = text.strip_prefix(DELIMITER)?;
    let (block, body) = rest.split_once(DELIMITER)?;

    if !block.contains("status: posted") {
        return None;
    }

    let replacement = format!("status: {reset_to}");
    let block = POSTED_STATUS.replace_all(block, regex::NoExpand(replacement.as_str()));
    let block = POSTED_AT_LINE.replace_all(&block, "");
    let block = POST_ID_LINE.replace_all(&block, "");

    Some(format!("{DELIMITER}{block}{DELIMITER}{body}"))
}
