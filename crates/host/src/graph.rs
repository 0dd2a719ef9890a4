use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Receives dependency edges between build targets.
pub trait BuildGraph {
    /// Declares that `target` must not be built before `dependency` is current.
    fn depends(&mut self, target: &Path, dependency: &Path);
}

/// [`BuildGraph`] that collects edges and renders them as a make-style
/// dependency file (`target: dependency ...`), the format consumed by make,
/// ninja, and SCons alike.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepFile {
    edges: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
}

impl DepFile {
    /// Creates an empty dependency file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no edge has been declared.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Dependencies declared for `target`.
    pub fn dependencies_of(&self, target: &Path) -> Vec<&Path> {
        self.edges
            .get(target)
            .map(|deps| deps.iter().map(PathBuf::as_path).collect())
            .unwrap_or_default()
    }

    /// Renders one rule per target, sorted by target path.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (target, deps) in &self.edges {
            out.push_str(&escape_make_path(target));
            out.push(':');
            for dep in deps {
                out.push(' ');
                out.push_str(&escape_make_path(dep));
            }
            out.push('\n');
        }
        out
    }
}

impl BuildGraph for DepFile {
    fn depends(&mut self, target: &Path, dependency: &Path) {
        self.edges
            .entry(target.to_path_buf())
            .or_default()
            .insert(dependency.to_path_buf());
    }
}

fn escape_make_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push('/'),
            ' ' | '#' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '$' => escaped.push_str("$$"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
