use host::HostError;
use std::path::PathBuf;

/// Result alias used by the version generator.
pub type VersionResult<T> = Result<T, VersionError>;

/// Errors that stop version generation.
///
/// Git problems are deliberately absent: they only select a fallback source.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The version manifest exists but cannot be used.
    #[error("invalid version manifest {}: {source}", path.display())]
    Manifest {
        /// Manifest path.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// Reading the manifest or writing the output failed.
    #[error(transparent)]
    Host(#[from] HostError),
}
