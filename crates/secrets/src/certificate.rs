use crate::error::{SecretsError, SecretsResult};
use std::path::Path;

/// First line every embedded certificate must carry.
pub const PEM_HEADER: &str = "-----BEGIN CERTIFICATE-----";

/// Converts PEM certificate text into one quoted C literal per line.
///
/// Each line is trimmed and terminated with an escaped newline, so adjacent
/// literals concatenate back into the original certificate text. `path` is
/// only used for diagnostics.
pub fn certificate_literal(text: &str, path: &Path) -> SecretsResult<Vec<String>> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.first().copied() != Some(PEM_HEADER) {
        return Err(SecretsError::NotPem {
            path: path.to_path_buf(),
        });
    }

    Ok(lines
        .into_iter()
        .map(|line| format!("\"{}\\n\"", emit::escape(line)))
        .collect())
}
