#![allow(clippy::module_name_repetitions)]

use host::HostError;
use secrets::SecretsError;
use std::fmt;
use std::io;
use version::VersionError;

/// Result alias used by command implementations.
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors that abort a command.
#[derive(Debug)]
pub enum TaskError {
    /// Incorrect usage detected after argument parsing.
    Usage(String),
    /// The configuration file is missing or invalid.
    Config(String),
    /// Secrets generation failed.
    Secrets(SecretsError),
    /// Version generation failed.
    Version(VersionError),
    /// A file operation failed outside the generators.
    Host(HostError),
    /// Writing command output failed.
    Io(io::Error),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(message) | Self::Config(message) => f.write_str(message),
            Self::Secrets(error) => write!(f, "{error}"),
            Self::Version(error) => write!(f, "{error}"),
            Self::Host(error) => write!(f, "{error}"),
            Self::Io(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for TaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(_) | Self::Config(_) => None,
            Self::Secrets(error) => Some(error),
            Self::Version(error) => Some(error),
            Self::Host(error) => Some(error),
            Self::Io(error) => Some(error),
        }
    }
}

impl From<SecretsError> for TaskError {
    fn from(error: SecretsError) -> Self {
        Self::Secrets(error)
    }
}

impl From<VersionError> for TaskError {
    fn from(error: VersionError) -> Self {
        Self::Version(error)
    }
}

impl From<HostError> for TaskError {
    fn from(error: HostError) -> Self {
        Self::Host(error)
    }
}

impl From<io::Error> for TaskError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
