//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for the `fwgen` binary.

use super::config::VerbosityConfig;
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `env_directives` (normally `RUST_LOG`) when
/// present and valid, otherwise the configured verbosity level.
pub fn build_filter(config: VerbosityConfig, env_directives: Option<&str>) -> EnvFilter {
    if let Some(directives) = env_directives.filter(|value| !value.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }
    EnvFilter::default().add_directive(config.level().into())
}

/// Installs the global subscriber writing compact lines to standard error.
///
/// Returns `false` when a subscriber was already installed, which happens when
/// tests drive the CLI several times in one process.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
