//! Fixed-width 256-bit unsigned integer.
//!
//! The value is represented as [u64; 4] in little-endian limb order, so
//! `limbs[0]` holds the least significant 64 bits. Only the handful of
//! operations needed for signature canonicalization are provided; this is
//! not a general purpose big integer.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Number of bytes in the big-endian encoding of a [`U256`].
pub const U256_BYTES: usize = 32;

/// 256-bit unsigned integer backed by four little-endian `u64` limbs.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct U256 {
    limbs: [u64; 4],
}

impl U256 {
    pub const ZERO: Self = U256 {
        limbs: [0, 0, 0, 0],
    };

    pub const ONE: Self = U256 {
        limbs: [1, 0, 0, 0],
    };

    pub const MAX: Self = U256 {
        limbs: [u64::MAX; 4],
    };

    /// Builds a value from little-endian limbs.
    #[inline]
    pub const fn from_words(limbs: [u64; 4]) -> Self {
        U256 { limbs }
    }

    /// Little-endian limbs of the value.
    #[inline]
    pub const fn words(&self) -> [u64; 4] {
        self.limbs
    }

    /// Interprets 32 bytes as a big-endian integer.
    pub const fn from_be_bytes(bytes: &[u8; U256_BYTES]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < U256_BYTES {
            let idx = 3 - i / 8;
            limbs[idx] = (limbs[idx] << 8) | bytes[i] as u64;
            i += 1;
        }
        U256 { limbs }
    }

    /// Big-endian encoding, always exactly 32 bytes.
    pub fn to_be_bytes(&self) -> [u8; U256_BYTES] {
        let mut out = [0u8; U256_BYTES];
        for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.limbs[3 - i].to_be_bytes());
        }
        out
    }

    /// Interprets a big-endian byte string of any length.
    ///
    /// Leading zero bytes are ignored, so a 33-byte input is accepted as long
    /// as its first byte is zero. Returns [`CodecError::OutOfRange`] when the
    /// value needs more than 256 bits.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];

        if significant.len() > U256_BYTES {
            return Err(CodecError::OutOfRange {
                bits: significant_bits(significant),
                length: U256_BYTES,
            });
        }

        let mut padded = [0u8; U256_BYTES];
        padded[U256_BYTES - significant.len()..].copy_from_slice(significant);
        Ok(Self::from_be_bytes(&padded))
    }

    /// Logical right shift by one bit.
    #[inline]
    pub const fn shr1(self) -> Self {
        let l = self.limbs;
        U256 {
            limbs: [
                (l[0] >> 1) | (l[1] << 63),
                (l[1] >> 1) | (l[2] << 63),
                (l[2] >> 1) | (l[3] << 63),
                l[3] >> 1,
            ],
        }
    }

    /// Wrapping subtraction, returning the borrow out of the top limb.
    #[inline]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (r0, borrow) = self.limbs[0].overflowing_sub(rhs.limbs[0]);
        let (r1, borrow) = borrowing_sub(self.limbs[1], rhs.limbs[1], borrow);
        let (r2, borrow) = borrowing_sub(self.limbs[2], rhs.limbs[2], borrow);
        let (r3, borrow) = borrowing_sub(self.limbs[3], rhs.limbs[3], borrow);
        (
            U256 {
                limbs: [r0, r1, r2, r3],
            },
            borrow,
        )
    }

    /// Subtraction that returns `None` on underflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Number of significant bits, zero for zero.
    pub const fn bits(&self) -> u32 {
        let mut i = 4;
        while i > 0 {
            i -= 1;
            if self.limbs[i] != 0 {
                return 64 * i as u32 + (64 - self.limbs[i].leading_zeros());
            }
        }
        0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.limbs[0] == 0 && self.limbs[1] == 0 && self.limbs[2] == 0 && self.limbs[3] == 0
    }
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Bit length of a big-endian byte string whose first byte is non-zero.
pub(crate) fn significant_bits(bytes: &[u8]) -> u64 {
    match bytes.first() {
        Some(&first) => (bytes.len() as u64 - 1) * 8 + u64::from(8 - first.leading_zeros()),
        None => 0,
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant limb first.
        for i in (0..4).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256 {
            limbs: [value, 0, 0, 0],
        }
    }
}

impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        BigUint::from_bytes_be(&value.to_be_bytes())
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = CodecError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        U256::from_be_slice(&value.to_bytes_be())
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self)
    }
}
