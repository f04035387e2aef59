//! Tracing/logging setup shared by binaries and tests that use the building
//! blocks.
//!
//! The domain crate only emits `tracing` events; nothing is printed until a
//! subscriber is installed here.

pub mod config;

pub use config::{LogFormat, TracingConfig};

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&TracingConfig::from_env());
}

/// Initialize process-wide tracing with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &TracingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = TracingConfig::default();
        init_with(&config);

        assert!(!init_with(&config));
        init();
    }
}
