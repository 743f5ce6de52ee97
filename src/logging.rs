// src/logging.rs
//! Subscriber setup for binaries and tests embedding this crate

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Install a fmt subscriber. `RUST_LOG` wins over `fallback_filter`.
///
/// Idempotent: a second call (or an already-installed subscriber) is a no-op.
pub fn init(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}

/// [`init`] using the filter from a loaded config
pub fn init_from_config(config: &Config) {
    init(&config.logging.filter);
}
