// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Base64Error, decode, decoded_len, encode, encoded_len};

#[test]
fn spec_scenario_unpadded_triplet() {
    let mut out = [0u8; 4];
    encode(&[0x00, 0x01, 0x02], &mut out);
    assert_eq!(&out, b"AAEC");

    let mut back = [0u8; 3];
    let n = decode(b"AAEC", &mut back).unwrap();
    assert_eq!(&back[..n], &[0x00, 0x01, 0x02]);
}

#[test]
fn spec_scenario_two_byte_tail() {
    let mut back = [0u8; 2];
    let n = decode(b"AAE", &mut back).unwrap();
    assert_eq!(&back[..n], &[0x00, 0x01]);
}

#[test]
fn spec_scenario_length_one_mod_four_is_invalid() {
    assert_eq!(decode(b"A", &mut [0u8; 1]), Err(Base64Error::InvalidLength(1)));
}

#[test]
fn decode_rejects_non_alphabet_bytes() {
    let err = decode(b"AA!C", &mut [0u8; 3]).unwrap_err();
    assert!(matches!(err, Base64Error::InvalidByte { byte: b'!', .. }));
}

#[test]
fn length_law_matches_spec() {
    for n in 0..512usize {
        assert_eq!(encoded_len(n), (4 * n).div_ceil(3));
        assert!(decoded_len(encoded_len(n)) >= n);
    }
}

#[test]
fn empty_round_trips() {
    let mut enc = [0u8; 0];
    encode(&[], &mut enc);
    let mut dec = [0u8; 0];
    assert_eq!(decode(&enc, &mut dec).unwrap(), 0);
}

proptest::proptest! {
    #[test]
    fn round_trip(bytes: Vec<u8>) {
        let mut enc = vec![0u8; encoded_len(bytes.len())];
        encode(&bytes, &mut enc);

        let mut dec = vec![0u8; decoded_len(enc.len())];
        let n = decode(&enc, &mut dec).unwrap();
        proptest::prop_assert_eq!(&dec[..n], &bytes[..]);
    }

    #[test]
    fn encoded_output_is_alphabet_only(bytes: Vec<u8>) {
        let mut enc = vec![0u8; encoded_len(bytes.len())];
        encode(&bytes, &mut enc);
        let all_alphabet = enc.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/');
        proptest::prop_assert!(all_alphabet);
    }
}
