//! Error types for the static export.

use std::path::PathBuf;

use thiserror::Error;

use crate::check::PageProblem;

/// Errors raised while exporting or checking the page.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The rendered page failed its structural checks
    #[error("rendered page has {} problem(s)", problems.len())]
    BrokenPage {
        /// Every problem found, in document order
        problems: Vec<PageProblem>,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
