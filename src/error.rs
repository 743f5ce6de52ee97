// src/error.rs
//! Public error type for the entire crate
//!
//! A failed comparison is not an error: `verify_credential` returns `Ok(false)`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Credential is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Digest primitive unavailable: {0}")]
    DigestUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
