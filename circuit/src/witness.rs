//! Circuit input records and their assembly from raw signer output.

use curve::U256;
use ecdsa_canon::{CanonicalSignature, RawPublicKey, RawSignature};
use serde::{Deserialize, Serialize};

use crate::chunks::{ChunkedInteger, NUM_CHUNKS};
use crate::decimal::to_decimal_strings;
use crate::error::CircuitError;

/// Input record for the byte-oriented P-256 circuit.
///
/// Field names and order follow the circuit's declared parameters. Every
/// element is the decimal string of one byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitWitnessInput {
    /// SHA-256 digest of the message (32 entries)
    pub hashed_message: Vec<String>,
    /// Public key x coordinate (32 entries)
    pub pub_key_x: Vec<String>,
    /// Public key y coordinate (32 entries)
    pub pub_key_y: Vec<String>,
    /// Canonical `r || s` (64 entries)
    pub signature: Vec<String>,
}

/// Input record for the chunked P-256 circuit.
///
/// Every element is the decimal string of a 43-bit limb, least significant
/// limb first, six per value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkedCircuitInput {
    pub r: Vec<String>,
    /// Canonical (low-S) `s`
    pub s: Vec<String>,
    pub hash: Vec<String>,
    /// Public key x coordinate
    pub pub0: Vec<String>,
    /// Public key y coordinate
    pub pub1: Vec<String>,
}

/// Builds the byte-oriented circuit input.
///
/// The signature is canonicalized first, so the `signature` field always
/// carries a low-S `s`. Output lengths are always 32/32/32/64.
pub fn assemble(signature: &RawSignature, public_key: &RawPublicKey) -> CircuitWitnessInput {
    let canon = signature.canonicalize();

    CircuitWitnessInput {
        hashed_message: to_decimal_strings(&signature.message_hash),
        pub_key_x: to_decimal_strings(public_key.x()),
        pub_key_y: to_decimal_strings(public_key.y()),
        signature: to_decimal_strings(&canon.to_bytes()),
    }
}

/// Builds the chunked circuit input.
///
/// Uses the same canonical signature as [`assemble`]. Each value is decoded
/// big-endian and split into six 43-bit limbs.
pub fn assemble_chunked(
    signature: &RawSignature,
    public_key: &RawPublicKey,
) -> Result<ChunkedCircuitInput, CircuitError> {
    let CanonicalSignature { r, s } = signature.canonicalize();

    Ok(ChunkedCircuitInput {
        r: chunk_strings(&r)?,
        s: chunk_strings(&s)?,
        hash: chunk_strings(&signature.message_hash)?,
        pub0: chunk_strings(public_key.x())?,
        pub1: chunk_strings(public_key.y())?,
    })
}

fn chunk_strings(bytes: &[u8; 32]) -> Result<Vec<String>, CircuitError> {
    let value = U256::from_be_bytes(bytes);
    let chunks = ChunkedInteger::<NUM_CHUNKS>::from_u256(&value)?;
    Ok(chunks.to_decimal_strings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::{HALF_ORDER, ORDER};
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_key(rng: &mut StdRng) -> RawPublicKey {
        RawPublicKey::from_coordinates(rng.random(), rng.random())
    }

    fn random_signature(rng: &mut StdRng) -> RawSignature {
        RawSignature {
            r: rng.random(),
            s: rng.random(),
            message_hash: rng.random(),
        }
    }

    #[test]
    fn test_lengths_are_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            let input = assemble(&random_signature(&mut rng), &random_key(&mut rng));
            assert_eq!(input.hashed_message.len(), 32);
            assert_eq!(input.pub_key_x.len(), 32);
            assert_eq!(input.pub_key_y.len(), 32);
            assert_eq!(input.signature.len(), 64);

            let all = input
                .hashed_message
                .iter()
                .chain(&input.pub_key_x)
                .chain(&input.pub_key_y)
                .chain(&input.signature);
            for entry in all {
                assert!(entry.parse::<u8>().is_ok(), "{entry} is not a byte");
            }
        }
    }

    #[test]
    fn test_signature_field_is_canonical() {
        let n_minus_one = ORDER.checked_sub(U256::ONE).unwrap();
        let signature = RawSignature {
            r: [0xab; 32],
            s: n_minus_one.to_be_bytes(),
            message_hash: [0; 32],
        };
        let key = RawPublicKey::from_coordinates([1; 32], [2; 32]);

        let input = assemble(&signature, &key);
        assert!(input.signature[..32].iter().all(|b| b == "171"));
        assert!(input.signature[32..63].iter().all(|b| b == "0"));
        assert_eq!(input.signature[63], "1");
        assert!(input.pub_key_x.iter().all(|b| b == "1"));
        assert!(input.pub_key_y.iter().all(|b| b == "2"));
    }

    #[test]
    fn test_chunked_lengths_and_values() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..32 {
            let signature = random_signature(&mut rng);
            let key = random_key(&mut rng);
            let input = assemble_chunked(&signature, &key).unwrap();

            for (field, bytes) in [
                (&input.hash, &signature.message_hash),
                (&input.pub0, key.x()),
                (&input.pub1, key.y()),
                (&input.r, &signature.r),
            ] {
                assert_eq!(field.len(), 6);
                let recomposed = field
                    .iter()
                    .rev()
                    .map(|l| l.parse::<u64>().unwrap())
                    .inspect(|&l| assert!(l < 1 << 43))
                    .fold(BigUint::from(0u8), |acc, l| (acc << 43u32) + l);
                assert_eq!(recomposed, BigUint::from_bytes_be(bytes));
            }
        }
    }

    #[test]
    fn test_chunked_uses_canonical_s() {
        let mut words = HALF_ORDER.words();
        words[0] += 1;
        let signature = RawSignature {
            r: [0; 32],
            s: U256::from_words(words).to_be_bytes(),
            message_hash: [0; 32],
        };
        let key = RawPublicKey::from_coordinates([0; 32], [0; 32]);

        let input = assemble_chunked(&signature, &key).unwrap();
        let expected = ChunkedInteger::<6>::from_u256(&HALF_ORDER).unwrap();
        assert_eq!(input.s, expected.to_decimal_strings());
        assert_eq!(input.r, vec!["0"; 6]);
    }
}
