//! Error types for directory mapping

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the walker and the output sink.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Path '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to console: {0}")]
    Console(#[from] io::Error),
}

impl MapError {
    /// True for the errors that mean no tree could be produced at all.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, MapError::NotFound(_) | MapError::NotADirectory(_))
    }
}
