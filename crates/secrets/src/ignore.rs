use crate::error::SecretsResult;
use host::FileStore;
use std::path::Path;

/// Appends `entry` to the ignore file unless a line already names it.
///
/// Returns `true` when the file was changed.
pub fn ensure_ignored(store: &dyn FileStore, ignore_file: &Path, entry: &str) -> SecretsResult<bool> {
    let existing = if store.exists(ignore_file) {
        store.read_to_string(ignore_file)?
    } else {
        String::new()
    };

    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(false);
    }

    let mut addition = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        addition.push('\n');
    }
    addition.push_str(entry);
    addition.push('\n');
    store.append(ignore_file, &addition)?;
    tracing::info!(file = %ignore_file.display(), entry, "added to ignore list");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::memory::MemoryFileStore;

    #[test]
    fn appends_once() {
        let store = MemoryFileStore::new().with_file(".gitignore", ".pio\n");
        let path = Path::new(".gitignore");
        assert!(ensure_ignored(&store, path, "secrets.json").expect("first"));
        assert!(!ensure_ignored(&store, path, "secrets.json").expect("second"));
        assert_eq!(
            store.contents(".gitignore").as_deref(),
            Some(".pio\nsecrets.json\n")
        );
    }

    #[test]
    fn inserts_missing_trailing_newline() {
        let store = MemoryFileStore::new().with_file(".gitignore", ".pio");
        ensure_ignored(&store, Path::new(".gitignore"), "secrets.json").expect("append");
        assert_eq!(
            store.contents(".gitignore").as_deref(),
            Some(".pio\nsecrets.json\n")
        );
    }

    #[test]
    fn creates_missing_ignore_file() {
        let store = MemoryFileStore::new();
        ensure_ignored(&store, Path::new(".gitignore"), "secrets.json").expect("append");
        assert_eq!(store.contents(".gitignore").as_deref(), Some("secrets.json\n"));
    }

    #[test]
    fn existing_entry_with_crlf_is_recognised() {
        let store = MemoryFileStore::new().with_file(".gitignore", "secrets.json\r\n");
        assert!(!ensure_ignored(&store, Path::new(".gitignore"), "secrets.json").expect("check"));
    }
}
