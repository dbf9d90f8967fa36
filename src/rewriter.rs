//! In-place rewrite of a single source file.

use crate::error::StripError;
use crate::filter::LineFilter;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a file that was rewritten successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    pub lines_removed: usize,
    pub bytes_written: u64,
}

/// Read the file, blank matching lines and write the result back to the same path.
///
/// The write truncates and replaces the file directly. There is no temporary
/// file and no backup: an interrupted write can leave the file partially written.
pub fn rewrite_file(path: &Path, filter: &LineFilter) -> Result<RewriteOutcome, StripError> {
    let content = fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let filtered = filter.apply(&content);

    fs::write(path, filtered.text.as_bytes()).map_err(|source| StripError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RewriteOutcome {
        path: path.to_path_buf(),
        lines_removed: filtered.removed,
        bytes_written: filtered.text.len() as u64,
    })
}
