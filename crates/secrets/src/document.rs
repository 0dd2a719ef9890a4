use crate::error::{SecretsError, SecretsResult};
use crate::schema::{Encoding, Schema};
use host::FileStore;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Declared type and encoding of a schema key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryKind {
    /// Declared C++ type.
    pub ty: String,
    /// Rendering strategy.
    pub encoding: Encoding,
}

/// A validated secrets document.
///
/// Holds the raw key-value pairs in document order together with the
/// name-to-kind lookup derived from the schema. Keys that the schema does not
/// mention are kept but have no kind.
#[derive(Clone, Debug)]
pub struct SecretsDocument {
    source_name: String,
    values: Map<String, Value>,
    kinds: HashMap<String, EntryKind>,
}

impl SecretsDocument {
    /// Name of the file the document was read from, used in banners and
    /// diagnostics.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Raw values in document order.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Schema-derived kind of `key`, or `None` for keys outside the schema.
    pub fn kind(&self, key: &str) -> Option<&EntryKind> {
        self.kinds.get(key)
    }
}

/// Parses `text` and checks that every schema key is present.
///
/// Extra keys are permitted.
pub fn parse_document(text: &str, source_name: &str, schema: &Schema) -> SecretsResult<SecretsDocument> {
    let value: Value = serde_json::from_str(text).map_err(|source| SecretsError::Parse {
        source_name: source_name.to_owned(),
        source,
    })?;

    let Value::Object(values) = value else {
        return Err(SecretsError::NotAMapping {
            source_name: source_name.to_owned(),
        });
    };

    if let Some(missing) = schema.names().find(|name| !values.contains_key(*name)) {
        return Err(SecretsError::MissingKey {
            source_name: source_name.to_owned(),
            key: missing.to_owned(),
        });
    }

    let kinds = schema
        .entries()
        .iter()
        .map(|entry| {
            (
                entry.name.clone(),
                EntryKind {
                    ty: entry.ty.clone(),
                    encoding: entry.encoding,
                },
            )
        })
        .collect();

    Ok(SecretsDocument {
        source_name: source_name.to_owned(),
        values,
        kinds,
    })
}

/// Reads `path` from the store and validates it against `schema`.
pub fn load_and_validate(
    store: &dyn FileStore,
    path: &Path,
    schema: &Schema,
) -> SecretsResult<SecretsDocument> {
    let source_name = path.display().to_string();
    tracing::debug!(path = %source_name, "validating secrets document");
    let text = store.read_to_string(path)?;
    parse_document(&text, &source_name, schema)
}
