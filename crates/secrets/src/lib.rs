#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `secrets` compiles a JSON secrets document (Wi-Fi credentials, MQTT
//! endpoint, device identity, a CA certificate) into a C++ implementation and
//! header pair, so that the secrets themselves never need to be committed.
//!
//! The pipeline mirrors the stages of the build hook:
//!
//! 1. [`ensure_template`] writes a document of schema defaults when none
//!    exists.
//! 2. [`load_and_validate`] parses the document and checks every
//!    [`Schema`] key is present.
//! 3. [`render`] turns each value into a declaration according to its
//!    [`Encoding`].
//! 4. [`register_dependents`] declares which object files wait on the
//!    generated header.
//! 5. [`ensure_ignored`] keeps the document out of version control.
//!
//! [`generate`] chains steps 2 and 3 and writes both files.
//!
//! # Errors
//!
//! Every failure is fatal and surfaces as a [`SecretsError`]. Validation
//! errors are raised before anything is written.
//!
//! # Examples
//!
//! ```
//! use host::memory::MemoryFileStore;
//! use secrets::{RenderOptions, Schema, ensure_template, load_and_validate, render};
//! use std::path::Path;
//!
//! let store = MemoryFileStore::new();
//! let schema = Schema::default();
//! let path = Path::new("secrets.json");
//!
//! ensure_template(&store, path, &schema).unwrap();
//! let document = load_and_validate(&store, path, &schema).unwrap();
//! let sources = render(&document, &RenderOptions::default(), &store);
//! // The default schema includes an empty certificate path, which must be
//! // filled in before rendering succeeds.
//! assert!(sources.is_err());
//! ```

mod certificate;
mod document;
mod error;
mod generate;
mod ignore;
mod registrar;
mod render;
mod schema;
mod template;

pub use certificate::{PEM_HEADER, certificate_literal};
pub use document::{EntryKind, SecretsDocument, load_and_validate, parse_document};
pub use error::{SecretsError, SecretsResult};
pub use generate::{SecretsPaths, generate};
pub use ignore::ensure_ignored;
pub use registrar::{RegistrarOptions, includes_header, object_path, register_dependents};
pub use render::{RenderOptions, RenderedSources, render};
pub use schema::{Encoding, Schema, SchemaEntry};
pub use template::{ensure_template, template_document};
