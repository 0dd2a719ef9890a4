use std::io;
use std::path::{Path, PathBuf};

/// Result alias used by file store operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors raised while touching the filesystem on behalf of a generator.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The requested file does not exist.
    #[error("{} does not exist", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Any other I/O failure.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// Short verb describing the failed operation (`read`, `write`, ...).
        action: &'static str,
        /// Path involved in the operation.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl HostError {
    /// Maps an [`io::Error`] into a [`HostError`], promoting `NotFound`.
    pub fn from_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                action,
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns `true` when the error reports a missing file.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
