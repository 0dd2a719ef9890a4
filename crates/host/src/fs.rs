use crate::error::{HostError, HostResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whole-file access to the project tree.
///
/// Paths are interpreted relative to the store's root; listing operations
/// return paths in the same relative form they were requested in.
pub trait FileStore {
    /// Returns `true` when `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the raw bytes of `path`.
    fn read(&self, path: &Path) -> HostResult<Vec<u8>>;

    /// Reads `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> HostResult<String>;

    /// Replaces the contents of `path`, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &str) -> HostResult<()>;

    /// Appends `contents` to `path`, creating the file if it is absent.
    fn append(&self, path: &Path, contents: &str) -> HostResult<()>;

    /// Lists regular files below `dir` recursively, sorted by path.
    ///
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>>;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Creates a store that resolves relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn create_parent(&self, path: &Path) -> HostResult<()> {
        let resolved = self.resolve(path);
        if let Some(parent) = resolved.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| HostError::from_io("create directory for", path, error))?;
            }
        }
        Ok(())
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &Path) -> HostResult<Vec<u8>> {
        fs::read(self.resolve(path)).map_err(|error| HostError::from_io("read", path, error))
    }

    fn read_to_string(&self, path: &Path) -> HostResult<String> {
        fs::read_to_string(self.resolve(path)).map_err(|error| HostError::from_io("read", path, error))
    }

    fn write(&self, path: &Path, contents: &str) -> HostResult<()> {
        self.create_parent(path)?;
        fs::write(self.resolve(path), contents)
            .map_err(|error| HostError::from_io("write", path, error))?;
        tracing::trace!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> HostResult<()> {
        self.create_parent(path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.resolve(path))
            .map_err(|error| HostError::from_io("open", path, error))?;
        file.write_all(contents.as_bytes())
            .map_err(|error| HostError::from_io("append to", path, error))
    }

    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        let base = self.resolve(dir);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = entry.map_err(|error| {
                let path = error.path().unwrap_or(&base).to_path_buf();
                HostError::Io {
                    action: "list",
                    path,
                    source: error.into(),
                }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&base) {
                files.push(dir.join(relative));
            }
        }
        files.sort();
        Ok(files)
    }
}
