#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `version` computes the firmware build version and renders it as a single
//! C definition that is compiled and linked into the application:
//!
//! ```c
//! const char* GEN_BUILD_VERSION = "1.2.0+abc1234";
//! ```
//!
//! Linking a constant instead of passing a `-D` define keeps a changing
//! version from invalidating every other object file.
//!
//! # Version sources
//!
//! [`resolve_version`] tries, in order:
//!
//! 1. `version.json` (`major`, `minor`) plus the short commit hash;
//! 2. `git describe --tags`, reformatted as `tag.count+hash`;
//! 3. the short commit hash alone;
//! 4. the literal [`DEV_VERSION`].
//!
//! Failing git invocations never fail the build; they only move resolution
//! down the chain. A malformed manifest, on the other hand, is reported.
//!
//! # Examples
//!
//! ```
//! use host::memory::{MemoryFileStore, ScriptedRunner};
//! use std::path::Path;
//!
//! let store = MemoryFileStore::new();
//! let runner = ScriptedRunner::new().succeeds("git describe --tags", "v1.0-34-g91ec25f\n");
//! let resolved = version::resolve_version(&store, &runner, Path::new("version.json")).unwrap();
//! assert_eq!(resolved.text, "1.0.34+91ec25f");
//! ```

mod describe;
mod error;
mod generate;
mod git;
mod manifest;
mod render;
mod resolve;

pub use describe::{Description, parse_describe};
pub use error::{VersionError, VersionResult};
pub use generate::generate_version;
pub use git::{describe_tags, short_commit};
pub use manifest::{Manifest, parse_manifest};
pub use render::{VersionOptions, render_version_source};
pub use resolve::{DEV_VERSION, ResolvedVersion, VersionSource, resolve_version};
