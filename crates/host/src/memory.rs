//! In-memory capability implementations.
//!
//! These back the generator unit tests; they never touch the filesystem or
//! spawn processes.

use crate::command::{CommandError, CommandRunner, command_line};
use crate::error::{HostError, HostResult};
use crate::fs::FileStore;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

/// [`FileStore`] holding files in a sorted map.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryFileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that seeds `path` with `contents`.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Returns the current contents of `path`, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Paths of all stored files.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileStore for MemoryFileStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> HostResult<Vec<u8>> {
        self.read_to_string(path).map(String::into_bytes)
    }

    fn read_to_string(&self, path: &Path) -> HostResult<String> {
        self.contents(path).ok_or_else(|| HostError::NotFound {
            path: path.to_path_buf(),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> HostResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_owned());
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> HostResult<()> {
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(contents);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect())
    }
}

/// [`CommandRunner`] that replays canned responses keyed by command line.
///
/// Commands without a scripted response fail as if the program were not
/// installed.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Option<String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Creates a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `command_line` (e.g. `"git describe --tags"`) to succeed with `stdout`.
    pub fn succeeds(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_owned(), Some(stdout.to_owned()));
        self
    }

    /// Scripts `command_line` to exit with a non-zero status.
    pub fn fails(mut self, command_line: &str) -> Self {
        self.responses.insert(command_line.to_owned(), None);
        self
    }

    /// Command lines invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let line = command_line(program, args);
        self.calls.borrow_mut().push(line.clone());
        match self.responses.get(&line) {
            Some(Some(stdout)) => Ok(stdout.clone()),
            Some(None) => Err(CommandError::Failed {
                program: line,
                code: Some(128),
                stderr: String::new(),
            }),
            None => Err(CommandError::Spawn {
                program: line,
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_lists_by_prefix() {
        let store = MemoryFileStore::new()
            .with_file("src/main.cpp", "")
            .with_file("src/net/mqtt.cpp", "")
            .with_file("lib/other.cpp", "");
        assert_eq!(
            store.list_files(Path::new("src")).expect("list"),
            vec![PathBuf::from("src/main.cpp"), PathBuf::from("src/net/mqtt.cpp")]
        );
    }

    #[test]
    fn memory_store_append_creates_file() {
        let store = MemoryFileStore::new();
        store.append(Path::new(".gitignore"), "secrets.json\n").expect("append");
        assert_eq!(store.contents(".gitignore").as_deref(), Some("secrets.json\n"));
    }

    #[test]
    fn scripted_runner_replays_and_records() {
        let runner = ScriptedRunner::new()
            .succeeds("git rev-parse --short HEAD", "abc1234\n")
            .fails("git describe --tags");

        assert_eq!(
            runner.run("git", &["rev-parse", "--short", "HEAD"]).expect("scripted"),
            "abc1234\n"
        );
        assert!(matches!(
            runner.run("git", &["describe", "--tags"]),
            Err(CommandError::Failed { .. })
        ));
        assert!(matches!(
            runner.run("svn", &["info"]),
            Err(CommandError::Spawn { .. })
        ));
        assert_eq!(runner.calls().len(), 3);
    }
}
