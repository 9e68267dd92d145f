//! Base-2^43 limb decomposition.
//!
//! The chunked circuit convention packs each 256-bit value into a few wide
//! field elements instead of 32 byte-sized ones. A value is split into `N`
//! limbs of 43 bits, least significant first:
//!
//! ```text
//! value = l₀ + l₁·2⁴³ + l₂·2⁸⁶ + ... + l_{N-1}·2^{43(N-1)},  lᵢ ∈ [0, 2⁴³)
//! ```
//!
//! With the default `N = 6` the capacity is 258 bits, enough for any P-256
//! scalar or coordinate.

use curve::U256;
use num_bigint::BigUint;

use crate::error::ChunkError;

/// Bits per limb.
pub const LIMB_BITS: u32 = 43;

/// Mask selecting the low [`LIMB_BITS`] bits of a `u64`.
pub const LIMB_MASK: u64 = (1u64 << LIMB_BITS) - 1;

/// Number of limbs used by the chunked circuit convention.
pub const NUM_CHUNKS: usize = 6;

/// An integer split into `N` little-endian 43-bit limbs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkedInteger<const N: usize = NUM_CHUNKS> {
    /// Limbs in little-endian order, each limb is < 2^43
    limbs: [u64; N],
}

impl<const N: usize> ChunkedInteger<N> {
    /// Total number of bits the limbs can hold.
    pub const CAPACITY_BITS: u32 = LIMB_BITS * N as u32;

    /// Splits a value given as little-endian `u64` words.
    ///
    /// Fails with [`ChunkError`] if the value has more than
    /// [`CAPACITY_BITS`](Self::CAPACITY_BITS) significant bits. High bits are
    /// never discarded.
    pub fn from_words(words: &[u64]) -> Result<Self, ChunkError> {
        let bits = significant_bits(words);
        if bits > Self::CAPACITY_BITS {
            return Err(ChunkError::Overflow {
                bits,
                capacity: Self::CAPACITY_BITS,
            });
        }

        let mut limbs = [0u64; N];
        let mut bit_position = 0u32;

        for limb in limbs.iter_mut() {
            let word_idx = (bit_position / 64) as usize;
            let bit_offset = bit_position % 64;

            if word_idx < words.len() {
                let mut limb_value = words[word_idx] >> bit_offset;

                // The limb straddles two words.
                if bit_offset + LIMB_BITS > 64 && word_idx + 1 < words.len() {
                    limb_value |= words[word_idx + 1] << (64 - bit_offset);
                }

                *limb = limb_value & LIMB_MASK;
            }

            bit_position += LIMB_BITS;
        }

        Ok(Self { limbs })
    }

    /// Splits a fixed-width 256-bit value.
    pub fn from_u256(value: &U256) -> Result<Self, ChunkError> {
        Self::from_words(&value.words())
    }

    /// Splits an arbitrary-precision value.
    pub fn from_biguint(value: &BigUint) -> Result<Self, ChunkError> {
        Self::from_words(&value.to_u64_digits())
    }

    /// Builds a chunked integer from limbs, rejecting any limb >= 2^43.
    pub fn from_limbs(limbs: [u64; N]) -> Option<Self> {
        limbs
            .iter()
            .all(|&l| l <= LIMB_MASK)
            .then_some(Self { limbs })
    }

    pub fn limbs(&self) -> &[u64; N] {
        &self.limbs
    }

    /// Recomposes `Σ limbs[i] · 2^(43·i)`.
    pub fn value(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::from(0u8), |acc, &limb| (acc << LIMB_BITS) + limb)
    }

    /// Each limb as a decimal string, least significant first.
    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.limbs.iter().map(u64::to_string).collect()
    }
}

/// Splits `value` into the default six 43-bit limbs.
///
/// ```
/// use circuit::chunk;
/// use num_bigint::BigUint;
///
/// let value = BigUint::from(1u8) << 43;
/// let chunks = chunk(&value).unwrap();
/// assert_eq!(chunks.limbs(), &[0, 1, 0, 0, 0, 0]);
/// ```
pub fn chunk(value: &BigUint) -> Result<ChunkedInteger, ChunkError> {
    ChunkedInteger::from_biguint(value)
}

fn significant_bits(words: &[u64]) -> u32 {
    words
        .iter()
        .rposition(|&w| w != 0)
        .map_or(0, |i| 64 * i as u32 + (64 - words[i].leading_zeros()))
}
