use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failures of a combine run
///
/// Unreadable individual files are not errors; they are skipped and
/// reported through [`super::Progress::skipped`].
#[derive(Debug, Error)]
pub enum CombineError {
    /// Root path is missing or cannot be inspected; nothing was read
    #[error("Error accessing path {}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The walk failed part way through
    #[error("Error walking the path {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// The combined buffer could not be written; all reading work is lost
    #[error("Error writing output file {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CombineError {
    /// Path the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            CombineError::Root { path, .. } => path,
            CombineError::Walk { root, .. } => root,
            CombineError::Output { path, .. } => path,
        }
    }
}
