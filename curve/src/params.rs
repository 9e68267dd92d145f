//! NIST P-256 group parameters.
//!
//! n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! Both constants are evaluated at compile time. A single wrong limb here
//! silently breaks low-S canonicalization for signatures near the boundary.

use crate::uint::U256;

/// Size of a P-256 scalar in bytes.
pub const SCALAR_BYTES: usize = 32;

/// Order of the P-256 base point, little-endian limbs.
pub const ORDER: U256 = U256::from_words([
    0xf3b9cac2fc632551,
    0xbce6faada7179e84,
    0xffffffffffffffff,
    0xffffffff00000000,
]);

/// `n >> 1`, the largest `s` accepted as low-S.
pub const HALF_ORDER: U256 = ORDER.shr1();
