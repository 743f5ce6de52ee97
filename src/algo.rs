// src/algo.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive] // so we can add more later
#[derive(Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    // Future:
    // Argon2id (salted, memory-hard)
}

impl DigestAlgorithm {
    /// Identifier as it appears in config files and log events
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
