// src/aliases.rs
//! Secret and digest types used throughout credential-digest

pub use secure_gate::dynamic_alias;

use crate::consts::DIGEST_LEN;

// Dynamic secrets
dynamic_alias!(PlainCredential, String); // User-supplied password, zeroized on drop

/// Raw output of the digest primitive. Not secret, only ever hex-encoded.
pub type DigestBytes = [u8; DIGEST_LEN];
