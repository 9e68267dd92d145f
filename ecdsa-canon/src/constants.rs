//! Byte sizes of the raw ECDSA P-256 values handed over by the signer.

/// Size of a SEC1 uncompressed public key in bytes.
///
/// The encoding is `0x04 || x || y` with 32-byte big-endian coordinates.
pub const PK_SIZE: usize = 65;

/// Size of one affine coordinate of a public key in bytes.
pub const COORDINATE_SIZE: usize = 32;

/// Size of a signature scalar (`r` or `s`) in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of the SHA-256 message digest in bytes.
pub const HASH_SIZE: usize = 32;

/// Size of a concatenated `r || s` signature in bytes.
pub const SIG_SIZE: usize = 64;

/// SEC1 tag byte marking an uncompressed point.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;
