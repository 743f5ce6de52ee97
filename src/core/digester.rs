//! Config-driven entry point
//!
//! `CredentialDigester` is a `Copy` value holding only the selected algorithm,
//! so it can be shared freely across threads and tasks.

use crate::algo::DigestAlgorithm;
use crate::config::Config;
use crate::core::digest::compute_digest_with;
use crate::core::verify::verify_credential_with;
use crate::CoreResult as Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialDigester {
    algorithm: DigestAlgorithm,
}

impl CredentialDigester {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.digest.algorithm)
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn digest(&self, plaintext: &str) -> Result<String> {
        compute_digest_with(self.algorithm, plaintext)
    }

    pub fn verify(&self, plaintext: &str, stored_digest_text: &str) -> Result<bool> {
        verify_credential_with(self.algorithm, plaintext, stored_digest_text)
    }
}
