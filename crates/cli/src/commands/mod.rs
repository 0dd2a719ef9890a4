//! Subcommand implementations.
//!
//! Each command takes the configuration section it reads, the parsed flags,
//! and the host capabilities, and reports results on `out`.

pub mod secrets;
pub mod template;
pub mod version;

use crate::config::SecretsSection;
use crate::error::TaskResult;
use host::FileStore;
use std::path::{Path, PathBuf};

/// Replaces `slot` with the command-line value when one was given.
fn override_path(slot: &mut PathBuf, value: Option<PathBuf>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Adds the secrets document to the ignore file when `manage_ignore` is set.
fn ignore_source(store: &dyn FileStore, section: &SecretsSection) -> TaskResult<()> {
    if !section.manage_ignore {
        return Ok(());
    }
    let entry = ignore_entry(&section.source);
    if ::secrets::ensure_ignored(store, &section.ignore_file, &entry)? {
        tracing::info!(ignore_file = %section.ignore_file.display(), "added {entry}");
    }
    Ok(())
}

/// Ignore-file spelling of `source`: forward slashes, as git expects.
fn ignore_entry(source: &Path) -> String {
    source.to_string_lossy().replace('\\', "/")
}
