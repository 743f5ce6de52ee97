// src/lib.rs
//! credential-digest — stable, comparable digests for plaintext credentials
//!
//! Features:
//! - SHA-256 over the UTF-8 bytes of the credential
//! - Lowercase hex digest text (64 chars)
//! - Plain-equality verification against a stored digest
//! - Optional tokio blocking-pool wrappers (`async` feature)
//!
//! The digest is unsalted and single-pass. Storage, transport and rate-limiting
//! belong to the caller.

pub mod algo;
pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod error;

#[cfg(feature = "logging")]
pub mod logging;

// Re-export everything users need at the crate root
pub use algo::DigestAlgorithm;
pub use aliases::{DigestBytes, PlainCredential};
pub use config::{load as load_config, Config};
pub use crate::core::{
    compute_digest, compute_digest_secret, compute_digest_utf8, compute_digest_with,
    digest_bytes, digest_bytes_with, is_digest_text, to_lower_hex, verify_credential,
    verify_credential_with, verify_secret, CredentialDigester, Result as CoreResult,
};
#[cfg(feature = "async")]
pub use crate::core::{compute_digest_async, verify_credential_async};
pub use error::CoreError;
