//! `fwgen.toml` loading.
//!
//! Every key is optional; a missing file yields the built-in defaults. Unknown
//! keys are rejected so typos surface instead of being silently ignored.

use crate::error::{TaskError, TaskResult};
use secrets::{RegistrarOptions, RenderOptions, Schema, SchemaEntry, SecretsPaths};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use version::VersionOptions;

/// File looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "fwgen.toml";

/// Parsed configuration file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FwgenConfig {
    /// `[secrets]` table.
    pub secrets: SecretsSection,
    /// `[version]` table.
    pub version: VersionSection,
}

/// Settings of the secrets generator.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsSection {
    /// Secrets document.
    pub source: PathBuf,
    /// Generated implementation.
    pub implementation: PathBuf,
    /// Generated header.
    pub header: PathBuf,
    /// Namespace wrapping the definitions.
    pub namespace: String,
    /// Include targets emitted at the top of both files.
    pub includes: Vec<String>,
    /// Directory scanned for sources that include the header.
    pub source_dir: PathBuf,
    /// Directory holding object files.
    pub object_dir: PathBuf,
    /// Make-style dependency file.
    pub depfile: PathBuf,
    /// Ignore list the source document is added to.
    pub ignore_file: PathBuf,
    /// Whether to maintain `ignore_file` at all.
    pub manage_ignore: bool,
    /// Replaces the built-in schema when present.
    pub schema: Option<Vec<SchemaEntry>>,
}

impl Default for SecretsSection {
    fn default() -> Self {
        let paths = SecretsPaths::default();
        let render = RenderOptions::default();
        Self {
            source: paths.source,
            implementation: paths.implementation,
            header: paths.header,
            namespace: render.namespace,
            includes: render.includes,
            source_dir: PathBuf::from("src"),
            object_dir: PathBuf::from("build"),
            depfile: PathBuf::from("build/secrets.d"),
            ignore_file: PathBuf::from(".gitignore"),
            manage_ignore: true,
            schema: None,
        }
    }
}

impl SecretsSection {
    /// Builds the schema, falling back to the built-in one.
    pub fn schema(&self) -> TaskResult<Schema> {
        match &self.schema {
            Some(entries) => Ok(Schema::new(entries.clone())?),
            None => Ok(Schema::default()),
        }
    }

    /// Rendering options for the implementation and header.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            namespace: self.namespace.clone(),
            includes: self.includes.clone(),
            ..RenderOptions::default()
        }
    }

    /// Document and output locations.
    pub fn paths(&self) -> SecretsPaths {
        SecretsPaths {
            source: self.source.clone(),
            implementation: self.implementation.clone(),
            header: self.header.clone(),
        }
    }

    /// Dependency registration inputs.
    pub fn registrar_options(&self) -> RegistrarOptions {
        RegistrarOptions {
            source_dir: self.source_dir.clone(),
            object_dir: self.object_dir.clone(),
            header: self.header.clone(),
        }
    }
}

/// Settings of the version generator.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct VersionSection {
    /// Version manifest.
    pub manifest: PathBuf,
    /// Generated C source.
    pub output: PathBuf,
    /// C type of the constant.
    pub variable_type: String,
    /// Exported symbol name.
    pub variable_name: String,
}

impl Default for VersionSection {
    fn default() -> Self {
        let options = VersionOptions::default();
        Self {
            manifest: PathBuf::from("version.json"),
            output: PathBuf::from("build/version.c"),
            variable_type: options.variable_type,
            variable_name: options.variable_name,
        }
    }
}

impl VersionSection {
    /// Declaration options for the generated source.
    pub fn options(&self) -> VersionOptions {
        VersionOptions {
            variable_type: self.variable_type.clone(),
            variable_name: self.variable_name.clone(),
        }
    }
}

/// Parses configuration text; `origin` names the file in error messages.
pub fn parse_config(text: &str, origin: &Path) -> TaskResult<FwgenConfig> {
    toml::from_str(text).map_err(|error| {
        TaskError::Config(format!("failed to parse {}: {error}", origin.display()))
    })
}

/// Loads the configuration.
///
/// An explicit path must exist; the implicit `<root>/fwgen.toml` is optional.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> TaskResult<FwgenConfig> {
    let (path, required) = match explicit {
        Some(path) => (root.join(path), true),
        None => (root.join(CONFIG_FILE_NAME), false),
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            tracing::debug!(config = %path.display(), "loaded configuration");
            parse_config(&text, &path)
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound && !required => {
            Ok(FwgenConfig::default())
        }
        Err(error) => Err(TaskError::Config(format!(
            "failed to read {}: {error}",
            path.display()
        ))),
    }
}
