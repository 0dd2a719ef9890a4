use crate::document::load_and_validate;
use crate::error::SecretsResult;
use crate::render::{RenderOptions, RenderedSources, render};
use crate::schema::Schema;
use host::FileStore;
use std::path::PathBuf;

/// Input document and output pair locations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretsPaths {
    /// Secrets document (`secrets.json`).
    pub source: PathBuf,
    /// Generated implementation (`secrets.cpp`).
    pub implementation: PathBuf,
    /// Generated header (`secrets.h`).
    pub header: PathBuf,
}

impl Default for SecretsPaths {
    fn default() -> Self {
        Self {
            source: PathBuf::from("secrets.json"),
            implementation: PathBuf::from("build/secrets.cpp"),
            header: PathBuf::from("src/secrets.h"),
        }
    }
}

/// Validates the document, renders the pair, and writes both files.
///
/// Both texts are rendered before the first write, so a validation or
/// certificate failure leaves previous outputs untouched.
pub fn generate(
    store: &dyn FileStore,
    schema: &Schema,
    paths: &SecretsPaths,
    options: &RenderOptions,
) -> SecretsResult<RenderedSources> {
    let document = load_and_validate(store, &paths.source, schema)?;
    let rendered = render(&document, options, store)?;

    store.write(&paths.implementation, &rendered.implementation)?;
    store.write(&paths.header, &rendered.header)?;
    tracing::info!(
        implementation = %paths.implementation.display(),
        header = %paths.header.display(),
        "generated secrets sources"
    );
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SecretsError;
    use host::memory::MemoryFileStore;
    use std::path::Path;

    #[test]
    fn failed_validation_writes_nothing() {
        let store = MemoryFileStore::new().with_file("secrets.json", "{\"device_name\": \"x\"}");
        let error = generate(
            &store,
            &Schema::default(),
            &SecretsPaths::default(),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(error, SecretsError::MissingKey { ref key, .. } if key == "friendly_name"));
        assert_eq!(store.paths(), vec![PathBuf::from("secrets.json")]);
    }

    #[test]
    fn failed_certificate_keeps_previous_outputs() {
        let paths = SecretsPaths::default();
        let template = crate::template::template_document(&Schema::default())
            .expect("template")
            .replace("\"ca_root_cert\": \"\"", "\"ca_root_cert\": \"ca.crt\"");
        let store = MemoryFileStore::new()
            .with_file("secrets.json", template)
            .with_file("ca.crt", "not a certificate\n")
            .with_file("src/secrets.h", "previous header");

        let error = generate(&store, &Schema::default(), &paths, &RenderOptions::default())
            .unwrap_err();

        assert!(matches!(error, SecretsError::NotPem { .. }));
        assert_eq!(
            store.contents(Path::new("src/secrets.h")).as_deref(),
            Some("previous header")
        );
        assert!(store.contents("build/secrets.cpp").is_none());
    }
}
