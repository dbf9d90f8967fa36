use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reported while walking and rewriting. None of them stop the run.
#[derive(Debug, Error)]
pub enum StripError {
    /// Source file could not be opened or read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Rewritten content could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A directory (or one of its entries) could not be listed.
    #[error("{0}")]
    DirectoryList(#[from] ignore::Error),
}
