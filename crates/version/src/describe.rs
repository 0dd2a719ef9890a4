use regex::Regex;
use std::sync::OnceLock;

/// Parts of a `git describe --tags` result such as `v1.0-34-g91ec25f`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Description {
    /// Tag without a leading `v`.
    pub tag: String,
    /// Commits since the tag, when present.
    pub count: Option<String>,
    /// Abbreviated commit hash, when present.
    pub hash: Option<String>,
}

fn describe_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^v?([\w.]+)(?:-(\d+)-g([a-z0-9]+))?").expect("describe pattern is valid")
    })
}

/// Parses describe output. Only the leading portion needs to match; anything
/// after it (such as `-dirty`) is ignored.
pub fn parse_describe(output: &str) -> Option<Description> {
    let captures = describe_pattern().captures(output.trim())?;
    Some(Description {
        tag: captures[1].to_owned(),
        count: captures.get(2).map(|m| m.as_str().to_owned()),
        hash: captures.get(3).map(|m| m.as_str().to_owned()),
    })
}
