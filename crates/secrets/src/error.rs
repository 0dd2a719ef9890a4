use host::HostError;
use std::path::PathBuf;

/// Result alias used throughout the secrets generator.
pub type SecretsResult<T> = Result<T, SecretsError>;

/// Errors that stop secrets generation.
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    /// A schema key is absent from the document.
    #[error("{source_name} expects key {key}")]
    MissingKey {
        /// Document the key was looked up in.
        source_name: String,
        /// First missing key in schema order.
        key: String,
    },
    /// The document's top level is not a key-value object.
    #[error("{source_name} must be a JSON object")]
    NotAMapping {
        /// Offending document.
        source_name: String,
    },
    /// A certificate file does not start with the PEM certificate header.
    #[error("certificate {} is not PEM-encoded", path.display())]
    NotPem {
        /// Certificate path taken from the document.
        path: PathBuf,
    },
    /// A certificate path points at nothing.
    #[error("certificate {} does not exist", path.display())]
    CertificateNotFound {
        /// Certificate path taken from the document.
        path: PathBuf,
    },
    /// A value cannot be expressed in its declared encoding.
    #[error("value of {key} {reason}")]
    InvalidValue {
        /// Document key.
        key: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The schema itself is unusable.
    #[error("invalid secrets schema: {0}")]
    InvalidSchema(String),
    /// The document is not valid JSON.
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        /// Offending document.
        source_name: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the template document failed.
    #[error("failed to serialise secrets template: {0}")]
    Encode(#[source] serde_json::Error),
    /// The serialised template is not UTF-8 text.
    #[error("secrets template is not valid UTF-8: {0}")]
    TemplateEncoding(#[from] std::string::FromUtf8Error),
    /// Reading or writing a file failed.
    #[error(transparent)]
    Host(#[from] HostError),
}
