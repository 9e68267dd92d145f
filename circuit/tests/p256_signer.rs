//! End-to-end: sign with RustCrypto's p256, assemble, decode the strings back
//! and check the canonical signature still verifies.

use circuit::{assemble, assemble_chunked, RawPublicKey, RawSignature, LIMB_BITS};
use ecdsa_canon::is_low_s;
use num_bigint::BigUint;
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

fn sign(rng: &mut StdRng, message: &[u8]) -> (SigningKey, RawSignature, RawPublicKey) {
    let sk = loop {
        let bytes: [u8; 32] = rng.random();
        if let Ok(sk) = SigningKey::from_slice(&bytes) {
            break sk;
        }
    };
    let sig: Signature = sk.sign(message);
    let bytes = sig.to_bytes();
    let digest = Sha256::digest(message);

    let raw = RawSignature::from_slices(&bytes[..32], &bytes[32..], &digest).unwrap();
    let key = RawPublicKey::from_sec1_bytes(sk.verifying_key().to_encoded_point(false).as_bytes())
        .unwrap();
    (sk, raw, key)
}

fn parse_bytes(strings: &[String]) -> Vec<u8> {
    strings.iter().map(|s| s.parse::<u8>().unwrap()).collect()
}

fn parse_limbs(strings: &[String]) -> Vec<u8> {
    let value = strings
        .iter()
        .rev()
        .map(|s| s.parse::<u64>().unwrap())
        .fold(BigUint::from(0u8), |acc, l| (acc << LIMB_BITS) + l);
    let raw = value.to_bytes_be();
    let mut out = vec![0u8; 32 - raw.len()];
    out.extend_from_slice(&raw);
    out
}

#[test]
fn test_byte_decimal_input_verifies() {
    let mut rng = StdRng::seed_from_u64(2024);
    let message = b"Hello world";

    for _ in 0..16 {
        let (sk, raw, key) = sign(&mut rng, message);
        let input = assemble(&raw, &key);

        assert_eq!(parse_bytes(&input.hashed_message), Sha256::digest(message).to_vec());
        let sig_bytes = parse_bytes(&input.signature);
        let sig = Signature::from_slice(&sig_bytes).unwrap();
        assert!(is_low_s(sig_bytes[32..].try_into().unwrap()));
        assert!(sk.verifying_key().verify(message, &sig).is_ok());

        let mut sec1 = vec![0x04];
        sec1.extend(parse_bytes(&input.pub_key_x));
        sec1.extend(parse_bytes(&input.pub_key_y));
        assert_eq!(sec1, sk.verifying_key().to_encoded_point(false).as_bytes());
    }
}

#[test]
fn test_chunked_input_verifies() {
    let mut rng = StdRng::seed_from_u64(77);
    let message = b"Hello world";

    for _ in 0..16 {
        let (sk, raw, key) = sign(&mut rng, message);
        let input = assemble_chunked(&raw, &key).unwrap();

        let mut sig_bytes = parse_limbs(&input.r);
        sig_bytes.extend(parse_limbs(&input.s));
        let sig = Signature::from_slice(&sig_bytes).unwrap();
        assert!(sk.verifying_key().verify(message, &sig).is_ok());

        assert_eq!(parse_limbs(&input.hash), raw.message_hash.to_vec());
        assert_eq!(parse_limbs(&input.pub0), key.x().to_vec());
        assert_eq!(parse_limbs(&input.pub1), key.y().to_vec());
    }
}
