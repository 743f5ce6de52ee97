//! Byte-to-text encoding for digests
//!
//! Each byte becomes two lowercase hex chars, high nibble first, leading zero kept.

use crate::consts::DIGEST_HEX_LEN;

/// Encode any byte slice as lowercase hex (`[0x00, 0xff, 0x0a]` → `"00ff0a"`)
pub fn to_lower_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// True if `s` has the shape of a stored digest text: 64 chars of `0-9a-f`.
///
/// The verifier does not call this; a malformed stored value simply never matches.
pub fn is_digest_text(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
