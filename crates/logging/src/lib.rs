#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the command line's `-v`/`-q` flags into a
//! [`VerbosityConfig`] and installs a `tracing` subscriber that writes
//! diagnostics to standard error, leaving standard output for results the
//! host build tool may capture.
//!
//! # Design
//!
//! The generators log through the plain `tracing` macros. Level selection
//! happens once, in [`init_tracing`]: `RUST_LOG` wins when set, otherwise the
//! verbosity level applies to every target.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//! use tracing::level_filters::LevelFilter;
//!
//! assert_eq!(VerbosityConfig::from_verbose_level(2).level(), LevelFilter::DEBUG);
//! assert_eq!(VerbosityConfig::quiet().level(), LevelFilter::ERROR);
//! ```

mod config;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use tracing_bridge::{build_filter, init_tracing};
