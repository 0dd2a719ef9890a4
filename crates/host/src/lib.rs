#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `host` describes everything the generators need from the surrounding build
//! orchestrator: reading and writing files ([`FileStore`]), running external
//! tools such as `git` ([`CommandRunner`]), and declaring dependency edges
//! between build targets ([`BuildGraph`]).
//!
//! # Design
//!
//! Each capability is a small trait with one production implementation
//! ([`LocalFileStore`], [`SystemCommandRunner`], [`DepFile`]) and, for the
//! stores and runners, an in-memory double in [`memory`]. Generator crates
//! accept `&dyn` capabilities so their logic can be exercised without a real
//! git checkout or touching the filesystem.
//!
//! # Examples
//!
//! ```
//! use host::memory::MemoryFileStore;
//! use host::FileStore;
//! use std::path::Path;
//!
//! let store = MemoryFileStore::new();
//! store.write(Path::new("secrets.json"), "{}").unwrap();
//! assert!(store.exists(Path::new("secrets.json")));
//! ```

mod command;
mod error;
mod fs;
mod graph;
pub mod memory;

pub use command::{CommandError, CommandRunner, SystemCommandRunner};
pub use error::{HostError, HostResult};
pub use fs::{FileStore, LocalFileStore};
pub use graph::{BuildGraph, DepFile};
