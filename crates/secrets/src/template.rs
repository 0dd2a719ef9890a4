use crate::error::{SecretsError, SecretsResult};
use crate::schema::Schema;
use host::FileStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Serialises the schema defaults as a JSON object with four-space
/// indentation and a trailing newline.
pub fn template_document(schema: &Schema) -> SecretsResult<String> {
    let mut object = Map::new();
    for entry in schema.entries() {
        object.insert(entry.name.clone(), entry.default.clone());
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    Value::Object(object)
        .serialize(&mut serializer)
        .map_err(SecretsError::Encode)?;

    let mut text = String::from_utf8(buffer)?;
    text.push('\n');
    Ok(text)
}

/// Writes a template document to `path` unless the file already exists.
///
/// Returns `true` when a file was created.
pub fn ensure_template(store: &dyn FileStore, path: &Path, schema: &Schema) -> SecretsResult<bool> {
    if store.exists(path) {
        tracing::debug!(path = %path.display(), "secrets document present; template skipped");
        return Ok(false);
    }

    store.write(path, &template_document(schema)?)?;
    tracing::info!(path = %path.display(), "generated default secrets document");
    Ok(true)
}
