// tests/common.rs
//! Shared test utilities — logging setup

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; call at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// A spread of credentials: empty, ASCII, whitespace, multi-byte, long
#[allow(dead_code)]
pub fn sample_credentials() -> Vec<String> {
    vec![
        String::new(),
        "password".to_owned(),
        "Password".to_owned(),
        " password ".to_owned(),
        "correct horse battery staple".to_owned(),
        "pässwörd-日本語-🔑".to_owned(),
        "x".repeat(10_000),
    ]
}
