//! Candidate file discovery under the queue root.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extensions (lowercase, without dot) of files that may hold a queue.
pub const CANDIDATE_EXTENSIONS: &[&str] = &["tsv", "csv", "txt", "md"];

/// Whether `path` has one of the candidate extensions (case-insensitive).
pub fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            CANDIDATE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Recursively list candidate files under `root`.
///
/// Entries are visited depth-first, sorted by file name within each
/// directory. Unreadable entries are logged and skipped. A missing root
/// yields an empty list; callers check existence first if they need to
/// distinguish the two.
pub fn discover_candidates(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if root.exists() {
                    warn!(error = %e, "skipping unreadable entry");
                }
                continue;
            }
        };

        let path = entry.path();

        // Follows symlinks to files, but WalkDir itself does not descend
        // into symlinked directories.
        if !path.is_file() {
            continue;
        }

        if is_candidate(path) {
            files.push(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "ignoring file with unsupported extension");
        }
    }

    files
}
