//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v` and `-q`.

use tracing::level_filters::LevelFilter;

/// Maximum level of diagnostics written to standard error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerbosityConfig {
    level: LevelFilter,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl VerbosityConfig {
    /// Maps the number of `-v` flags to a level: warnings by default, then
    /// info, debug, and trace.
    pub fn from_verbose_level(level: u8) -> Self {
        let level = match level {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self { level }
    }

    /// Only errors.
    pub fn quiet() -> Self {
        Self {
            level: LevelFilter::ERROR,
        }
    }

    /// Selected level.
    pub fn level(self) -> LevelFilter {
        self.level
    }
}
