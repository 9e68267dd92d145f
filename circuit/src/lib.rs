//! # P-256 Signature Circuit Inputs
//!
//! Builds the exact input records that zero-knowledge P-256 ECDSA verification
//! circuits expect, starting from the raw output of a signer.
//!
//! ## Overview
//!
//! A signer produces `r`, `s`, the SHA-256 digest of the message and a SEC1
//! uncompressed public key. Before a circuit can be executed on these values
//! they have to be:
//!
//! 1. **Canonicalized**: `s` is replaced by `n - s` when it lies above `n / 2`
//!    (see [`ecdsa_canon::normalize`]). Circuits only accept the low-S form.
//! 2. **Encoded** in the layout the circuit declares:
//!    - [`InputConvention::ByteDecimal`]: one field element per byte
//!    - [`InputConvention::Base43Chunks`]: six 43-bit limbs per 256-bit value
//!
//! Nothing in this crate performs curve arithmetic, and no proof is generated
//! or verified. Circuit execution is delegated through [`WitnessExecutor`].
//!
//! ## Quick Start
//!
//! ```
//! use circuit::{assemble, assemble_chunked};
//! use ecdsa_canon::{RawPublicKey, RawSignature};
//!
//! let signature = RawSignature {
//!     r: [1; 32],
//!     s: [2; 32],
//!     message_hash: [3; 32],
//! };
//! let mut sec1 = [0u8; 65];
//! sec1[0] = 0x04;
//! let public_key = RawPublicKey::from_sec1_bytes(&sec1).unwrap();
//!
//! let input = assemble(&signature, &public_key);
//! assert_eq!(input.signature.len(), 64);
//!
//! let chunked = assemble_chunked(&signature, &public_key).unwrap();
//! assert_eq!(chunked.r.len(), 6);
//! ```
//!
//! ## Input Layouts
//!
//! ### [`CircuitWitnessInput`]
//!
//! | field            | entries | content                      |
//! |------------------|---------|------------------------------|
//! | `hashed_message` | 32      | SHA-256 digest bytes         |
//! | `pub_key_x`      | 32      | public key x bytes           |
//! | `pub_key_y`      | 32      | public key y bytes           |
//! | `signature`      | 64      | `r` bytes then low-S `s`     |
//!
//! Every entry is the decimal string of a byte.
//!
//! ### [`ChunkedCircuitInput`]
//!
//! Fields `r`, `s`, `hash`, `pub0`, `pub1`, six entries each:
//!
//! ```text
//! value (256 bits) → [l₀, l₁, ..., l₅] where each lᵢ ∈ [0, 2⁴³)
//! ```
//!
//! Limbs are little-endian. The capacity is 258 bits; a wider value is
//! rejected with [`ChunkError`] rather than truncated.
//!
//! ## Selecting a Convention
//!
//! The convention can be parsed from a string (`"byte_decimal"`,
//! `"base43_chunks"`) or detected from the parameter names in a compiled
//! circuit's ABI:
//!
//! ```
//! use circuit::{CircuitAbi, InputConvention};
//!
//! let abi = CircuitAbi::from_artifact_json(
//!     r#"{"abi": {"parameters": [
//!         {"name": "r"}, {"name": "s"}, {"name": "hash"},
//!         {"name": "pub0"}, {"name": "pub1"}
//!     ]}}"#,
//! )
//! .unwrap();
//! assert_eq!(InputConvention::detect(&abi).unwrap(), InputConvention::Base43Chunks);
//! ```
//!
//! Then [`assemble_for`] builds a [`CircuitInput`], whose
//! [`to_json`](CircuitInput::to_json) is the executor's input map.

pub mod chunks;
mod convention;
mod decimal;
mod error;
mod executor;
mod witness;

pub use chunks::{chunk, ChunkedInteger, LIMB_BITS, LIMB_MASK, NUM_CHUNKS};
pub use convention::{assemble_for, AbiParameter, CircuitAbi, CircuitInput, InputConvention};
pub use decimal::to_decimal_strings;
pub use error::{ChunkError, CircuitError, ExecuteError};
pub use executor::{execute_signature, WitnessExecutor};
pub use witness::{assemble, assemble_chunked, ChunkedCircuitInput, CircuitWitnessInput};

// Re-export the signer-facing types
pub use ecdsa_canon::{
    CanonicalSignature, RawPublicKey, RawSignature, SignatureComponents, SignatureError,
};
