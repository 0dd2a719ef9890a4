//! Shared test utilities for the fwgen workspace.
//!
//! [`TestDir`] owns a temporary project directory that is removed on drop and
//! offers relative-path helpers for seeding fixtures and inspecting outputs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A well-formed (if meaningless) PEM certificate for fixtures.
pub const SAMPLE_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----\n\
MIIBszCCAVmgAwIBAgIUZmFrZSBjZXJ0aWZpY2F0ZSBmb3IgdGVzdHM=\n\
dGhpcyBpcyBub3QgYSByZWFsIGNlcnRpZmljYXRl\n\
-----END CERTIFICATE-----\n";

/// Temporary project directory removed on drop.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Creates an empty directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Absolute path of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Resolves `relative` inside the directory.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    /// Reads `relative` as UTF-8 text.
    pub fn read_text(&self, relative: impl AsRef<Path>) -> io::Result<String> {
        fs::read_to_string(self.join(relative))
    }

    /// Returns `true` when `relative` exists.
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }
}
