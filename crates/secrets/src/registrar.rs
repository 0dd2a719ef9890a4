use crate::error::SecretsResult;
use host::{BuildGraph, FileStore};
use regex::bytes::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Extensions of files that compile into their own object.
const COMPILED_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "c++", "ino", "S", "s"];

/// Where to look for sources and where their objects land.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrarOptions {
    /// Directory scanned recursively for project sources.
    pub source_dir: PathBuf,
    /// Directory the host places object files in.
    pub object_dir: PathBuf,
    /// Generated header the sources may include.
    pub header: PathBuf,
}

fn quoted_include() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?m)^[ \t]*#[ \t]*include[ \t]*"([^"\n]+)""#).expect("include pattern is valid")
    })
}

/// Returns `true` when `source` has a quoted include of exactly `header_name`.
///
/// Angle-bracket includes and includes through a directory prefix do not
/// count. The source need not be valid UTF-8.
pub fn includes_header(source: impl AsRef<[u8]>, header_name: &str) -> bool {
    quoted_include()
        .captures_iter(source.as_ref())
        .any(|captures| &captures[1] == header_name.as_bytes())
}

/// Object target the host builds from `source` (`<object_dir>/<source>.o`).
pub fn object_path(object_dir: &Path, source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".o");
    object_dir.join(name)
}

/// Declares every source that includes the generated header as depending on
/// it, so the header is regenerated before those sources compile.
///
/// Returns the matching sources in path order.
pub fn register_dependents(
    store: &dyn FileStore,
    graph: &mut dyn BuildGraph,
    options: &RegistrarOptions,
) -> SecretsResult<Vec<PathBuf>> {
    let Some(header_name) = options.header.file_name().and_then(|name| name.to_str()) else {
        return Ok(Vec::new());
    };

    let mut dependents = Vec::new();
    for source in store.list_files(&options.source_dir)? {
        if !is_compiled(&source) {
            continue;
        }
        let contents = store.read(&source)?;
        if !includes_header(&contents, header_name) {
            continue;
        }

        let object = object_path(&options.object_dir, &source);
        tracing::debug!(
            source = %source.display(),
            object = %object.display(),
            "source includes {header_name}; adding dependency"
        );
        graph.depends(&object, &options.header);
        dependents.push(source);
    }

    Ok(dependents)
}

fn is_compiled(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPILED_EXTENSIONS.contains(&ext))
}
