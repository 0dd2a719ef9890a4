use crate::describe::parse_describe;
use crate::error::VersionResult;
use crate::git::{describe_tags, short_commit};
use crate::manifest::parse_manifest;
use host::{CommandRunner, FileStore};
use std::fmt;
use std::path::Path;

/// Version used when neither a manifest nor git information is available.
pub const DEV_VERSION: &str = "<dev>";

/// Which source produced a [`ResolvedVersion`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionSource {
    /// `version.json`, with or without a commit suffix.
    Manifest,
    /// A parsed `git describe --tags` result.
    Describe,
    /// Describe output that did not match the expected shape, used verbatim.
    RawDescribe,
    /// The short commit hash alone.
    Commit,
    /// [`DEV_VERSION`].
    Fallback,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Manifest => "manifest",
            Self::Describe => "git describe",
            Self::RawDescribe => "raw git describe",
            Self::Commit => "git commit",
            Self::Fallback => "fallback",
        })
    }
}

/// A computed build version.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedVersion {
    /// Version text, unescaped.
    pub text: String,
    /// Where it came from.
    pub source: VersionSource,
}

impl ResolvedVersion {
    fn new(text: impl Into<String>, source: VersionSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// Resolves the build version; the first available source wins.
///
/// Only an unreadable or malformed manifest is an error.
pub fn resolve_version(
    store: &dyn FileStore,
    runner: &dyn CommandRunner,
    manifest_path: &Path,
) -> VersionResult<ResolvedVersion> {
    if store.exists(manifest_path) {
        let text = store.read_to_string(manifest_path)?;
        let manifest = parse_manifest(&text, manifest_path)?;
        let mut version = manifest.base_version();
        if let Some(commit) = short_commit(runner) {
            version.push('+');
            version.push_str(&commit);
        }
        return Ok(ResolvedVersion::new(version, VersionSource::Manifest));
    }
    tracing::debug!(manifest = %manifest_path.display(), "no version manifest; asking git");

    if let Some(output) = describe_tags(runner) {
        return Ok(from_description(&output, runner));
    }

    if let Some(commit) = short_commit(runner) {
        return Ok(ResolvedVersion::new(commit, VersionSource::Commit));
    }

    Ok(ResolvedVersion::new(DEV_VERSION, VersionSource::Fallback))
}

fn from_description(output: &str, runner: &dyn CommandRunner) -> ResolvedVersion {
    let Some(description) = parse_describe(output) else {
        return ResolvedVersion::new(output.trim(), VersionSource::RawDescribe);
    };

    let count = description.count.as_deref().unwrap_or("0");
    let hash = description.hash.or_else(|| short_commit(runner));
    let text = match hash {
        Some(hash) => format!("{}.{count}+{hash}", description.tag),
        None => format!("{}.{count}", description.tag),
    };
    ResolvedVersion::new(text, VersionSource::Describe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::memory::{MemoryFileStore, ScriptedRunner};

    const MANIFEST: &str = "version.json";

    fn resolve(store: &MemoryFileStore, runner: &ScriptedRunner) -> ResolvedVersion {
        resolve_version(store, runner, Path::new(MANIFEST)).expect("resolution succeeds")
    }

    #[test]
    fn manifest_with_commit() {
        let store = MemoryFileStore::new().with_file(MANIFEST, r#"{"major": 1, "minor": 2}"#);
        let runner = ScriptedRunner::new()
            .succeeds("git rev-parse --short HEAD", "abc1234\n")
            .succeeds("git describe --tags", "v9.9-1-gdeadbee\n");
        let resolved = resolve(&store, &runner);
        assert_eq!(resolved, ResolvedVersion::new("1.2.0+abc1234", VersionSource::Manifest));
        assert_eq!(runner.calls(), ["git rev-parse --short HEAD"]);
    }

    #[test]
    fn manifest_without_git() {
        let store = MemoryFileStore::new().with_file(MANIFEST, r#"{"major": 1, "minor": 2}"#);
        let resolved = resolve(&store, &ScriptedRunner::new());
        assert_eq!(resolved.text, "1.2.0");
    }

    #[test]
    fn describe_with_count_and_hash() {
        let runner = ScriptedRunner::new().succeeds("git describe --tags", "v1.0-34-g91ec25f\n");
        let resolved = resolve(&MemoryFileStore::new(), &runner);
        assert_eq!(resolved, ResolvedVersion::new("1.0.34+91ec25f", VersionSource::Describe));
    }

    #[test]
    fn exact_tag_uses_zero_count_and_head_commit() {
        let runner = ScriptedRunner::new()
            .succeeds("git describe --tags", "v2.1\n")
            .succeeds("git rev-parse --short HEAD", "abc1234\n");
        assert_eq!(resolve(&MemoryFileStore::new(), &runner).text, "2.1.0+abc1234");
    }

    #[test]
    fn exact_tag_without_commit_omits_suffix() {
        let runner = ScriptedRunner::new().succeeds("git describe --tags", "v2.1\n");
        assert_eq!(resolve(&MemoryFileStore::new(), &runner).text, "2.1.0");
    }

    #[test]
    fn unmatched_describe_is_used_verbatim() {
        let runner = ScriptedRunner::new().succeeds("git describe --tags", "-odd-tag\n");
        assert_eq!(
            resolve(&MemoryFileStore::new(), &runner),
            ResolvedVersion::new("-odd-tag", VersionSource::RawDescribe)
        );
    }

    #[test]
    fn no_tags_falls_back_to_commit() {
        let runner = ScriptedRunner::new()
            .fails("git describe --tags")
            .succeeds("git rev-parse --short HEAD", "abc1234\n");
        assert_eq!(
            resolve(&MemoryFileStore::new(), &runner),
            ResolvedVersion::new("abc1234", VersionSource::Commit)
        );
    }

    #[test]
    fn nothing_available_yields_dev_marker() {
        assert_eq!(
            resolve(&MemoryFileStore::new(), &ScriptedRunner::new()),
            ResolvedVersion::new("<dev>", VersionSource::Fallback)
        );
    }

    #[test]
    fn malformed_manifest_is_reported() {
        let store = MemoryFileStore::new().with_file(MANIFEST, "{\"major\": 1");
        assert!(resolve_version(&store, &ScriptedRunner::new(), Path::new(MANIFEST)).is_err());
    }
}
