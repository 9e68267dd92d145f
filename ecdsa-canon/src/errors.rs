//! Error types for raw signature and public key handling.

use thiserror::Error;

/// Errors raised while accepting signer output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A byte array does not have the size its role requires.
    ///
    /// Signature scalars and the message hash must be 32 bytes, the public
    /// key 65 bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The public key is not a SEC1 uncompressed point.
    #[error("public key prefix must be 0x04, got {0:#04x}")]
    InvalidPrefix(u8),
}
