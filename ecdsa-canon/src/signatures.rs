//! Raw signature types and low-S canonicalization.

use curve::{HALF_ORDER, ORDER, U256};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{HASH_SIZE, SCALAR_SIZE, SIG_SIZE};
use crate::errors::SignatureError;

/// An ECDSA P-256 signature as produced by the signer, plus the digest it covers.
///
/// All three values are big-endian 32-byte integers. Nothing is checked
/// about `r` and `s` beyond their length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSignature {
    /// The `r` scalar
    pub r: [u8; SCALAR_SIZE],
    /// The `s` scalar, possibly in its high form
    pub s: [u8; SCALAR_SIZE],
    /// SHA-256 digest of the signed message
    pub message_hash: [u8; HASH_SIZE],
}

/// The signer's wire representation: three variable-length byte vectors.
///
/// Convert it with [`RawSignature::try_from`] to get the length checks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
    pub message_hash: Vec<u8>,
}

/// A signature whose `s` is in low-S form (`s <= n / 2`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalSignature {
    /// The `r` scalar, unchanged from the raw signature
    pub r: [u8; SCALAR_SIZE],
    /// Either the original `s` or `n - s`, whichever is not above `n / 2`
    pub s: [u8; SCALAR_SIZE],
}

impl RawSignature {
    /// Builds a signature from byte slices, failing closed on any wrong length.
    pub fn from_slices(r: &[u8], s: &[u8], message_hash: &[u8]) -> Result<Self, SignatureError> {
        Ok(Self {
            r: to_array("r", r)?,
            s: to_array("s", s)?,
            message_hash: to_array("message hash", message_hash)?,
        })
    }

    /// Returns the low-S form of this signature.
    pub fn canonicalize(&self) -> CanonicalSignature {
        normalize(&self.r, &self.s)
    }
}

impl TryFrom<&SignatureComponents> for RawSignature {
    type Error = SignatureError;

    fn try_from(components: &SignatureComponents) -> Result<Self, Self::Error> {
        Self::from_slices(&components.r, &components.s, &components.message_hash)
    }
}

impl TryFrom<SignatureComponents> for RawSignature {
    type Error = SignatureError;

    fn try_from(components: SignatureComponents) -> Result<Self, Self::Error> {
        Self::try_from(&components)
    }
}

impl CanonicalSignature {
    /// Concatenates `r || s` into the 64-byte compact form.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..SCALAR_SIZE].copy_from_slice(&self.r);
        out[SCALAR_SIZE..].copy_from_slice(&self.s);
        out
    }
}

/// Returns `true` if `s <= n / 2`.
pub fn is_low_s(s: &[u8; SCALAR_SIZE]) -> bool {
    U256::from_be_bytes(s) <= HALF_ORDER
}

/// Maps a signature to its low-S form.
///
/// ECDSA accepts both `(r, s)` and `(r, n - s)` for the same message. This
/// picks the one with `s <= n / 2`. An `s` exactly equal to `n / 2` is kept
/// as is. `r` is copied through without inspection.
///
/// The result is idempotent: normalizing an already canonical signature
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use curve::ORDER;
/// use ecdsa_canon::normalize;
///
/// let r = [7u8; 32];
/// let n_minus_one = ORDER.checked_sub(curve::U256::ONE).unwrap().to_be_bytes();
///
/// let canon = normalize(&r, &n_minus_one);
/// assert_eq!(canon.r, r);
/// assert_eq!(canon.s[31], 1);
/// assert!(canon.s[..31].iter().all(|&b| b == 0));
/// ```
pub fn normalize(r: &[u8; SCALAR_SIZE], s: &[u8; SCALAR_SIZE]) -> CanonicalSignature {
    let s_int = U256::from_be_bytes(s);

    let s_low = if s_int > HALF_ORDER {
        // An s >= n cannot come from an honest signer; it wraps modulo 2^256.
        let (flipped, _) = ORDER.overflowing_sub(s_int);
        trace!(s = %s_int, flipped = %flipped, "flipping high-S signature");
        flipped
    } else {
        s_int
    };

    CanonicalSignature {
        r: *r,
        s: s_low.to_be_bytes(),
    }
}

fn to_array<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N], SignatureError> {
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidLength {
            field,
            expected: N,
            actual: bytes.len(),
        })
}
