//! Errors for byte/integer conversions.

use thiserror::Error;

/// Errors raised when converting between byte strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A decode was attempted on a zero-length byte string.
    #[error("cannot decode an empty byte string")]
    Empty,

    /// The integer needs more bits than the requested encoding can hold.
    #[error("value of {bits} bits does not fit in {length} bytes")]
    OutOfRange { bits: u64, length: usize },
}
