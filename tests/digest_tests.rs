// tests/digest_tests.rs
mod common;

use credential_digest::consts::{DIGEST_HEX_LEN, DIGEST_LEN};
use credential_digest::{
    compute_digest, compute_digest_secret, compute_digest_utf8, compute_digest_with,
    digest_bytes, is_digest_text, to_lower_hex, CoreError, DigestAlgorithm, PlainCredential,
};

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_empty_plaintext_matches_published_vector() {
    common::setup();
    assert_eq!(compute_digest("").unwrap(), EMPTY_SHA256);
}

#[test]
fn test_digest_is_deterministic() {
    common::setup();
    for p in common::sample_credentials() {
        assert_eq!(compute_digest(&p).unwrap(), compute_digest(&p).unwrap());
    }
}

#[test]
fn test_digest_is_64_chars_lowercase_hex() {
    common::setup();
    for p in common::sample_credentials() {
        let text = compute_digest(&p).unwrap();
        assert_eq!(text.len(), DIGEST_HEX_LEN);
        assert!(text
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert!(is_digest_text(&text));
    }
}

#[test]
fn test_digest_bytes_are_32_and_encode_to_text() {
    let bytes = digest_bytes("hunter2").unwrap();
    assert_eq!(bytes.len(), DIGEST_LEN);
    assert_eq!(to_lower_hex(&bytes), compute_digest("hunter2").unwrap());
}

#[test]
fn test_distinct_plaintexts_give_distinct_digests() {
    let a = compute_digest("password").unwrap();
    let b = compute_digest("Password").unwrap();
    let c = compute_digest(" password ").unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn test_multibyte_plaintext_hashes_utf8_bytes() {
    let p = "pässwörd";
    assert_eq!(
        compute_digest(p).unwrap(),
        compute_digest_utf8(p.as_bytes()).unwrap()
    );
}

#[test]
fn test_invalid_utf8_is_encoding_failure() {
    let err = compute_digest_utf8(b"abc\xc3\x28").unwrap_err();
    assert!(matches!(err, CoreError::Encoding(_)));
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn test_explicit_algorithm_matches_default() {
    assert_eq!(
        compute_digest_with(DigestAlgorithm::Sha256, "abc").unwrap(),
        compute_digest("abc").unwrap()
    );
}

#[test]
fn test_secret_wrapper_digests_inner_value() {
    let secret = PlainCredential::new("hunter2".to_owned());
    assert_eq!(
        compute_digest_secret(&secret).unwrap(),
        compute_digest("hunter2").unwrap()
    );
}

#[test]
fn test_hex_encoding_exactness() {
    assert_eq!(to_lower_hex(&[0x00, 0xFF, 0x0A]), "00ff0a");
    assert_eq!(to_lower_hex(&[0x01, 0x10, 0xab]), "0110ab");
}
