//! Async wrappers — run the digest on tokio's blocking pool
//!
//! The calling task suspends until the digest completes. Dropping the future
//! is safe: the blocking job owns its inputs and writes nothing.

use crate::core::digest::compute_digest;
use crate::core::verify::verify_credential;
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Async form of [`compute_digest`]
pub async fn compute_digest_async(plaintext: String) -> Result<String> {
    tokio::task::spawn_blocking(move || compute_digest(&plaintext))
        .await
        .map_err(|e| CoreError::DigestUnavailable(format!("digest task join failed: {e}")))?
}

/// Async form of [`verify_credential`]
pub async fn verify_credential_async(plaintext: String, stored_digest_text: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_credential(&plaintext, &stored_digest_text))
        .await
        .map_err(|e| CoreError::DigestUnavailable(format!("verify task join failed: {e}")))?
}
