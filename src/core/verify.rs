//! Verifier — recompute and compare against a stored digest text
//!
//! The comparison is plain string equality: case- and length-sensitive,
//! not constant-time. The stored value is not shape-checked first.

#[cfg(feature = "logging")]
use tracing::debug;

use crate::algo::DigestAlgorithm;
use crate::aliases::PlainCredential;
use crate::core::digest::compute_digest_with;
use crate::CoreResult as Result;

/// Verify `plaintext` against `stored_digest_text` using the given algorithm
pub fn verify_credential_with(
    algorithm: DigestAlgorithm,
    plaintext: &str,
    stored_digest_text: &str,
) -> Result<bool> {
    let recomputed = compute_digest_with(algorithm, plaintext)?;
    let matches = recomputed == stored_digest_text;

    #[cfg(feature = "logging")]
    debug!(algorithm = %algorithm, matches, "verified credential");

    Ok(matches)
}

/// `Ok(true)` iff `plaintext` digests to exactly `stored_digest_text`.
///
/// A mismatch (including a malformed stored value) is `Ok(false)`;
/// `Err` means the digest could not be computed at all.
pub fn verify_credential(plaintext: &str, stored_digest_text: &str) -> Result<bool> {
    verify_credential_with(DigestAlgorithm::default(), plaintext, stored_digest_text)
}

/// Same as [`verify_credential`] for a zeroizing secret wrapper
pub fn verify_secret(plaintext: &PlainCredential, stored_digest_text: &str) -> Result<bool> {
    verify_credential(plaintext.expose_secret(), stored_digest_text)
}
