use crate::error::{VersionError, VersionResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// `major`/`minor` may be written as JSON numbers or strings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
enum Component {
    Number(u64),
    Text(String),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Deserialize)]
struct RawManifest {
    major: Component,
    minor: Component,
}

/// Explicit version declared in `version.json`. The patch level is always 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Manifest {
    /// Major version as written.
    pub major: String,
    /// Minor version as written.
    pub minor: String,
}

impl Manifest {
    /// `major.minor.0`
    pub fn base_version(&self) -> String {
        format!("{}.{}.0", self.major, self.minor)
    }
}

/// Parses a manifest document. Fields other than `major`/`minor` are ignored.
pub fn parse_manifest(text: &str, path: &Path) -> VersionResult<Manifest> {
    let raw: RawManifest = serde_json::from_str(text).map_err(|source| VersionError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Manifest {
        major: raw.major.to_string(),
        minor: raw.minor.to_string(),
    })
}
