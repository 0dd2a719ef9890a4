#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! Text-level helpers shared by the generators: C string literal escaping
//! ([`quote`], [`escape`]) and [`SourceUnit`], which lays out a generated
//! translation unit as banner, includes, and a namespace block.
//!
//! # Examples
//!
//! ```
//! use emit::{LineEnding, SourceUnit, quote};
//!
//! let mut unit = SourceUnit::new(emit::generated_banner("secrets.json"));
//! unit.include("<stdint.h>").namespace("secrets").line_ending(LineEnding::Lf);
//! unit.push_line(format!("    const char* name = {};", quote("mate")));
//!
//! let text = unit.render();
//! assert!(text.contains("namespace secrets {\n    const char* name = \"mate\";\n}\n"));
//! ```

mod literal;
mod unit;

pub use literal::{escape, quote};
pub use unit::{INDENT, LineEnding, SourceUnit, generated_banner};
