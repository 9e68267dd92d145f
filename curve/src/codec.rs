//! Lossless conversion between big-endian byte strings and unsigned integers.
//!
//! These helpers work on arbitrary-precision [`BigUint`] values so that any
//! input length is accepted. Fixed 32-byte values should go through
//! [`U256::from_be_bytes`](crate::U256::from_be_bytes) instead.

use num_bigint::BigUint;

use crate::error::CodecError;

/// Interprets `bytes` as a big-endian unsigned integer.
///
/// Any length of at least one byte is accepted.
///
/// # Example
///
/// ```
/// use curve::codec;
/// use num_bigint::BigUint;
///
/// let value = codec::decode(&[0x01, 0x00]).unwrap();
/// assert_eq!(value, BigUint::from(256u32));
/// ```
pub fn decode(bytes: &[u8]) -> Result<BigUint, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Encodes `value` big-endian, left-padded with zeros to exactly `length` bytes.
///
/// Returns [`CodecError::OutOfRange`] if `value >= 2^(8 * length)`. The high
/// bits are never dropped.
///
/// # Example
///
/// ```
/// use curve::codec;
/// use num_bigint::BigUint;
///
/// let bytes = codec::encode(&BigUint::from(0x0102u32), 4).unwrap();
/// assert_eq!(bytes, vec![0, 0, 1, 2]);
/// assert!(codec::encode(&BigUint::from(0x0102u32), 1).is_err());
/// ```
pub fn encode(value: &BigUint, length: usize) -> Result<Vec<u8>, CodecError> {
    let bits = value.bits();
    if bits > 8 * length as u64 {
        return Err(CodecError::OutOfRange { bits, length });
    }

    let mut out = vec![0u8; length];
    if bits > 0 {
        let raw = value.to_bytes_be();
        out[length - raw.len()..].copy_from_slice(&raw);
    }
    Ok(out)
}
