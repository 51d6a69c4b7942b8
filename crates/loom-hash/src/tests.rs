// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{HashError, hkdf_sha256, hmac_sha256, sha256};

fn hex_out(out: &[u8]) -> String {
    hex::encode(out)
}

#[test]
fn sha256_empty_string() {
    let mut out = [0u8; 32];
    sha256(b"", &mut out);
    assert_eq!(
        hex_out(&out),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc() {
    let mut out = [0u8; 32];
    sha256(b"abc", &mut out);
    assert_eq!(
        hex_out(&out),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

/// Two-block message of 'a's (130 bytes), a standard SHA-256 test vector.
#[test]
fn sha256_two_block_message() {
    let msg = vec![0x61u8; 130];
    let mut out = [0u8; 32];
    sha256(&msg, &mut out);
    assert_eq!(
        hex_out(&out),
        "1e3c4f4750c8c29bbfa9ced317788176b156d342e57f7777f62fd7221a44312f"
    );
}

/// RFC 4231 test case 1.
#[test]
fn hmac_sha256_rfc4231_case1() {
    let key = [0x0bu8; 20];
    let data = b"Hi There";
    let mut out = [0u8; 32];
    hmac_sha256(&key, data, &mut out);
    assert_eq!(
        hex_out(&out),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

/// RFC 4231 test case with a key longer than the HMAC block size (requires
/// the shorten-via-SHA-256 path).
#[test]
fn hmac_sha256_long_key_is_shortened() {
    let key = [0xaau8; 131];
    let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
    let mut out = [0u8; 32];
    hmac_sha256(&key, data, &mut out);
    assert_eq!(
        hex_out(&out),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

/// RFC 5869 Appendix A.1, test case 1.
#[test]
fn hkdf_sha256_rfc5869_case1() {
    let ikm = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let salt = hex::decode("000102030405060708090a0b0c").unwrap();
    let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").unwrap();
    let mut okm = [0u8; 42];
    hkdf_sha256(&salt, &ikm, &info, &mut okm).unwrap();
    assert_eq!(
        hex_out(&okm),
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
    );
}

/// RFC 5869 Appendix A.3: zero-length salt and info.
#[test]
fn hkdf_sha256_rfc5869_case3_zero_length_salt() {
    let ikm = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
    let mut okm = [0u8; 42];
    hkdf_sha256(&[], &ikm, &[], &mut okm).unwrap();
    assert_eq!(
        hex_out(&okm),
        "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8"
    );
}

#[test]
fn hkdf_sha256_rejects_output_longer_than_max() {
    let mut out = vec![0u8; crate::HKDF_MAX_OUTPUT_LEN + 1];
    let err = hkdf_sha256(&[], &[], &[], &mut out).unwrap_err();
    assert_eq!(
        err,
        HashError::OutputTooLong {
            requested: crate::HKDF_MAX_OUTPUT_LEN + 1,
            max: crate::HKDF_MAX_OUTPUT_LEN,
        }
    );
}

#[test]
fn hkdf_sha256_accepts_output_at_max() {
    let mut out = vec![0u8; crate::HKDF_MAX_OUTPUT_LEN];
    assert!(hkdf_sha256(&[], b"ikm", &[], &mut out).is_ok());
}

proptest::proptest! {
    #[test]
    fn hkdf_output_is_deterministic(salt in proptest::collection::vec(proptest::num::u8::ANY, 0..32),
                                     ikm in proptest::collection::vec(proptest::num::u8::ANY, 1..64),
                                     info in proptest::collection::vec(proptest::num::u8::ANY, 0..32)) {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        hkdf_sha256(&salt, &ikm, &info, &mut a).unwrap();
        hkdf_sha256(&salt, &ikm, &info, &mut b).unwrap();
        proptest::prop_assert_eq!(a, b);
    }
}
