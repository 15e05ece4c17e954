//! HS256 signer against RFC 4231 and the `hmac` crate

use hex_literal::hex;
use hmac::{Hmac, Mac};
use proptest::prelude::*;
use sha2::Sha256;
use tessera_hashing::{BLOCK_SIZE, Hs256, MacTag, sign, verify};

fn reference(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).unwrap();
    mac.update(message);
    mac.finalize().into_bytes().into()
}

#[test]
fn rfc4231_case_1() {
    let tag = Hs256::new(&[0x0b; 20]).sign("Hi There");
    assert_eq!(
        tag.as_bytes(),
        &hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
}

#[test]
fn rfc4231_case_2() {
    assert_eq!(
        sign("what do ya want for nothing?", b"Jefe"),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn rfc4231_case_6_key_longer_than_block() {
    let tag = Hs256::new(&[0xaa; 131]).sign("Test Using Larger Than Block-Size Key - Hash Key First");
    assert_eq!(
        tag.as_bytes(),
        &hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
    );
}

#[test]
fn every_key_length_class_signs() {
    for len in [0, 1, BLOCK_SIZE - 1, BLOCK_SIZE, BLOCK_SIZE + 1, 4 * BLOCK_SIZE] {
        let key = vec![0x42; len];
        let tag = sign("message", &key);
        assert_eq!(tag.len(), 64, "key length {len}");
        assert!(tag.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(tag, hex::encode(reference(&key, b"message")), "key length {len}");
    }
}

#[test]
fn tampering_changes_the_tag() {
    let key = [0u8; 32];
    let original = sign("header.payload", &key);

    assert_ne!(original, sign("header.paylaod", &key));
    assert_ne!(original, sign("header.payload ", &key));

    let mut flipped = key;
    flipped[0] ^= 1;
    assert_ne!(original, sign("header.payload", &flipped));
}

#[test]
fn verify_detects_wrong_key_and_message() {
    let tag = sign("m", b"k1");
    assert!(verify("m", b"k1", &tag));
    assert!(!verify("m", b"k2", &tag));
    assert!(!verify("n", b"k1", &tag));
    assert!(!verify("m", b"k1", &tag[..63]));
}

proptest! {
    #[test]
    fn matches_reference_implementation(
        key in proptest::collection::vec(any::<u8>(), 0..200),
        message in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let tag = Hs256::new(&key).sign(&message);
        prop_assert_eq!(tag, MacTag::from_bytes(reference(&key, &message)));
    }

    #[test]
    fn signing_is_deterministic(key in proptest::collection::vec(any::<u8>(), 0..100), message in ".{0,64}") {
        let signer = Hs256::new(&key);
        prop_assert_eq!(signer.sign(&message), signer.sign(&message));
        prop_assert_eq!(sign(&message, &key), sign(&message, &key));
    }
}
