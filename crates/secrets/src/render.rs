use crate::certificate::certificate_literal;
use crate::document::SecretsDocument;
use crate::error::{SecretsError, SecretsResult};
use crate::schema::Encoding;
use emit::{INDENT, LineEnding, SourceUnit, generated_banner};
use host::{FileStore, HostError};
use serde_json::Value;
use std::path::Path;

/// Layout options for the generated pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Namespace wrapping every declaration.
    pub namespace: String,
    /// Include targets such as `<stdint.h>`, emitted in both files.
    pub includes: Vec<String>,
    /// Line terminator for both files.
    pub line_ending: LineEnding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: String::from("secrets"),
            includes: vec![String::from("<stdint.h>"), String::from("<IPAddress.h>")],
            line_ending: LineEnding::CrLf,
        }
    }
}

/// Implementation and header text produced from one document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedSources {
    /// Definitions (`type name = value;`).
    pub implementation: String,
    /// Declarations (`extern type name;`).
    pub header: String,
}

/// Renders every schema-known key of `document`, in document order.
///
/// Certificate paths are read through `store`. Keys outside the schema are
/// skipped.
pub fn render(
    document: &SecretsDocument,
    options: &RenderOptions,
    store: &dyn FileStore,
) -> SecretsResult<RenderedSources> {
    let banner = generated_banner(document.source_name());
    let mut implementation = SourceUnit::new(banner.clone());
    let mut header = SourceUnit::new(banner);
    header.pragma_once();

    for unit in [&mut implementation, &mut header] {
        for include in &options.includes {
            unit.include(include);
        }
        unit.namespace(&options.namespace)
            .line_ending(options.line_ending);
    }

    for (name, value) in document.values() {
        let Some(kind) = document.kind(name) else {
            tracing::debug!(key = %name, "key not in schema; skipped");
            continue;
        };

        // Single-line values follow a space; certificate blocks start on a new line.
        let initializer = match kind.encoding {
            Encoding::RawConstant => format!(" {}", raw_constant(name, value)?),
            Encoding::StringLiteral => format!(" {}", emit::quote(&scalar_text(name, value)?)),
            Encoding::PemCertificate => certificate_block(name, value, store)?,
        };

        implementation.push_line(format!("{INDENT}{} {name} ={initializer};", kind.ty));
        header.push_line(format!("{INDENT}extern {} {name};", kind.ty));
    }

    Ok(RenderedSources {
        implementation: implementation.render(),
        header: header.render(),
    })
}

fn raw_constant(name: &str, value: &Value) -> SecretsResult<String> {
    let text = scalar_text(name, value)?;
    if text.trim().is_empty() {
        return Err(SecretsError::InvalidValue {
            key: name.to_owned(),
            reason: "must not be empty for a raw constant",
        });
    }
    Ok(text)
}

fn scalar_text(name: &str, value: &Value) -> SecretsResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(SecretsError::InvalidValue {
            key: name.to_owned(),
            reason: "must be a string, number, or boolean",
        }),
    }
}

fn certificate_block(name: &str, value: &Value, store: &dyn FileStore) -> SecretsResult<String> {
    let Value::String(path) = value else {
        return Err(SecretsError::InvalidValue {
            key: name.to_owned(),
            reason: "must be a certificate file path",
        });
    };
    if path.trim().is_empty() {
        return Err(SecretsError::InvalidValue {
            key: name.to_owned(),
            reason: "must name a certificate file",
        });
    }

    let path = Path::new(path);
    let text = store.read_to_string(path).map_err(|error| match error {
        HostError::NotFound { .. } => SecretsError::CertificateNotFound {
            path: path.to_path_buf(),
        },
        other => SecretsError::Host(other),
    })?;
    let literals = certificate_literal(&text, path)?;
    tracing::debug!(key = %name, path = %path.display(), lines = literals.len(), "embedding certificate");

    let mut block = String::new();
    for literal in literals {
        block.push('\n');
        block.push_str(INDENT);
        block.push_str(INDENT);
        block.push_str(&literal);
    }
    Ok(block)
}
