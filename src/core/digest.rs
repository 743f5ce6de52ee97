//! Digest producer — plaintext credential → SHA-256 digest
//!
//! Pure functions, no I/O. The plaintext is hashed as UTF-8 with no salt,
//! so the same input yields the same digest on every platform.

use sha2::{Digest, Sha256};

#[cfg(feature = "logging")]
use tracing::trace;

use crate::algo::DigestAlgorithm;
use crate::aliases::{DigestBytes, PlainCredential};
use crate::core::encode::to_lower_hex;
use crate::CoreResult as Result;

/// Raw digest bytes of `plaintext` using the given algorithm
pub fn digest_bytes_with(algorithm: DigestAlgorithm, plaintext: &str) -> Result<DigestBytes> {
    let bytes: DigestBytes = match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(plaintext.as_bytes()).into(),
    };

    #[cfg(feature = "logging")]
    trace!(algorithm = %algorithm, len = bytes.len(), "computed credential digest");

    Ok(bytes)
}

/// Raw SHA-256 digest bytes of `plaintext`
pub fn digest_bytes(plaintext: &str) -> Result<DigestBytes> {
    digest_bytes_with(DigestAlgorithm::default(), plaintext)
}

/// Digest text (64 lowercase hex chars) using the given algorithm
pub fn compute_digest_with(algorithm: DigestAlgorithm, plaintext: &str) -> Result<String> {
    let bytes = digest_bytes_with(algorithm, plaintext)?;
    Ok(to_lower_hex(&bytes))
}

/// Digest text for a credential being registered or changed.
/// The caller persists the returned string.
pub fn compute_digest(plaintext: &str) -> Result<String> {
    compute_digest_with(DigestAlgorithm::default(), plaintext)
}

/// Same as [`compute_digest`] for raw caller bytes, which must be valid UTF-8
pub fn compute_digest_utf8(raw: &[u8]) -> Result<String> {
    let plaintext = std::str::from_utf8(raw)?;
    compute_digest(plaintext)
}

/// Same as [`compute_digest`] for a zeroizing secret wrapper
pub fn compute_digest_secret(plaintext: &PlainCredential) -> Result<String> {
    compute_digest(plaintext.expose_secret())
}
