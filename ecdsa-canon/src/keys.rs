//! SEC1 uncompressed P-256 public keys.

use serde::{Deserialize, Serialize};

use crate::constants::{COORDINATE_SIZE, PK_SIZE, SEC1_UNCOMPRESSED_TAG};
use crate::errors::SignatureError;

/// A P-256 public key as raw affine coordinates.
///
/// Only the encoding is checked on construction; the point is not verified
/// to lie on the curve.
///
/// # Example
///
/// ```
/// use ecdsa_canon::RawPublicKey;
///
/// let mut sec1 = [0u8; 65];
/// sec1[0] = 0x04;
/// sec1[1] = 0xaa;
/// sec1[64] = 0xbb;
///
/// let key = RawPublicKey::from_sec1_bytes(&sec1).expect("valid encoding");
/// assert_eq!(key.x()[0], 0xaa);
/// assert_eq!(key.y()[31], 0xbb);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawPublicKey {
    x: [u8; COORDINATE_SIZE],
    y: [u8; COORDINATE_SIZE],
}

impl RawPublicKey {
    /// Parses a 65-byte `0x04 || x || y` encoding.
    ///
    /// # Returns
    ///
    /// - `Err(SignatureError::InvalidLength)` if `bytes` is not 65 bytes long
    /// - `Err(SignatureError::InvalidPrefix)` if the first byte is not `0x04`
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != PK_SIZE {
            return Err(SignatureError::InvalidLength {
                field: "public key",
                expected: PK_SIZE,
                actual: bytes.len(),
            });
        }
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(SignatureError::InvalidPrefix(bytes[0]));
        }

        let mut x = [0u8; COORDINATE_SIZE];
        let mut y = [0u8; COORDINATE_SIZE];
        x.copy_from_slice(&bytes[1..1 + COORDINATE_SIZE]);
        y.copy_from_slice(&bytes[1 + COORDINATE_SIZE..]);
        Ok(Self { x, y })
    }

    /// Builds a key directly from its coordinates.
    pub fn from_coordinates(x: [u8; COORDINATE_SIZE], y: [u8; COORDINATE_SIZE]) -> Self {
        Self { x, y }
    }

    /// Big-endian x coordinate.
    pub fn x(&self) -> &[u8; COORDINATE_SIZE] {
        &self.x
    }

    /// Big-endian y coordinate.
    pub fn y(&self) -> &[u8; COORDINATE_SIZE] {
        &self.y
    }

    /// Re-encodes the key as `0x04 || x || y`.
    pub fn to_sec1_bytes(&self) -> [u8; PK_SIZE] {
        let mut out = [0u8; PK_SIZE];
        out[0] = SEC1_UNCOMPRESSED_TAG;
        out[1..1 + COORDINATE_SIZE].copy_from_slice(&self.x);
        out[1 + COORDINATE_SIZE..].copy_from_slice(&self.y);
        out
    }
}

impl TryFrom<&[u8]> for RawPublicKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_sec1_bytes(bytes)
    }
}
