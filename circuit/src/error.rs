//! Errors raised while building circuit inputs.

use ecdsa_canon::SignatureError;
use thiserror::Error;

/// Failure to split a value into limbs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The value does not fit in the requested number of limbs.
    #[error("value of {bits} bits overflows {capacity}-bit chunk capacity")]
    Overflow {
        /// Significant bits of the rejected value
        bits: u32,
        /// `LIMB_BITS * N` for the requested chunk count
        capacity: u32,
    },
}

/// Errors from assembling or serializing circuit inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Chunk(#[from] ChunkError),

    /// A circuit ABI declares parameters matching no known input layout.
    #[error("circuit parameters {0:?} match no known input convention")]
    UnknownLayout(Vec<String>),

    #[error("unknown input convention: {0}")]
    UnknownConvention(String),

    /// A JSON (de)serialization failure, kept as its message.
    ///
    /// `serde_json::Error` is neither `Clone` nor `PartialEq`, so it cannot be
    /// held here without dropping those derives. Its source chain is lost.
    #[error("json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CircuitError {
    fn from(err: serde_json::Error) -> Self {
        CircuitError::Json(err.to_string())
    }
}

/// Failure of [`execute_signature`](crate::execute_signature).
///
/// Executor errors are passed through untouched.
#[derive(Debug, Error)]
pub enum ExecuteError<E> {
    #[error("failed to assemble circuit input: {0}")]
    Assemble(#[from] CircuitError),

    #[error("witness executor failed: {0}")]
    Executor(#[source] E),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunks::ChunkedInteger;
    use curve::U256;

    #[test]
    fn test_chunk_overflow_converts() {
        let err: CircuitError = ChunkedInteger::<2>::from_u256(&U256::MAX)
            .unwrap_err()
            .into();
        assert_eq!(
            err,
            CircuitError::Chunk(ChunkError::Overflow {
                bits: 256,
                capacity: 86
            })
        );
        assert_eq!(
            err.to_string(),
            "value of 256 bits overflows 86-bit chunk capacity"
        );
    }

    #[test]
    fn test_json_error_keeps_message() {
        let err: CircuitError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        let CircuitError::Json(message) = &err else {
            panic!("expected a json error, got {err:?}");
        };
        assert!(!message.is_empty());
        assert_eq!(err.to_string(), format!("json: {message}"));
        assert_eq!(err.clone(), err);
    }
}
