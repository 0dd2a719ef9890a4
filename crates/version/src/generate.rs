use crate::error::VersionResult;
use crate::render::{VersionOptions, render_version_source};
use crate::resolve::{ResolvedVersion, resolve_version};
use host::{CommandRunner, FileStore};
use std::path::Path;

/// Resolves the version and rewrites `output` with its definition.
///
/// The output is rewritten on every call so the host always relinks the
/// current version.
pub fn generate_version(
    store: &dyn FileStore,
    runner: &dyn CommandRunner,
    manifest: &Path,
    output: &Path,
    options: &VersionOptions,
) -> VersionResult<ResolvedVersion> {
    let resolved = resolve_version(store, runner, manifest)?;
    tracing::info!(version = %resolved.text, source = %resolved.source, "Build Version: {}", resolved.text);
    store.write(output, &render_version_source(&resolved.text, options))?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::memory::{MemoryFileStore, ScriptedRunner};

    #[test]
    fn writes_definition_to_output() {
        let store = MemoryFileStore::new().with_file("build/version.c", "stale");
        let runner = ScriptedRunner::new().succeeds("git rev-parse --short HEAD", "abc1234");
        let resolved = generate_version(
            &store,
            &runner,
            Path::new("version.json"),
            Path::new("build/version.c"),
            &VersionOptions::default(),
        )
        .expect("generation succeeds");

        assert_eq!(resolved.text, "abc1234");
        assert_eq!(
            store.contents("build/version.c").as_deref(),
            Some("const char* GEN_BUILD_VERSION = \"abc1234\";\n")
        );
    }
}
