//! Low-S canonicalization of ECDSA P-256 signatures.
//!
//! This library accepts the raw output of a P-256 signer and brings it into
//! the single canonical form a proof circuit accepts:
//! - [`RawSignature`] holds `r`, `s` and the SHA-256 message digest
//! - [`RawPublicKey`] holds the affine coordinates of a SEC1 uncompressed key
//! - [`normalize`] maps `(r, s)` to `(r, min(s, n - s))`
//!
//! # Overview
//!
//! ECDSA signatures are malleable: if `(r, s)` verifies, so does `(r, n - s)`.
//! Circuits usually constrain `s <= n / 2` so that only one of the two is
//! provable. Signers such as RustCrypto's `p256` do not normalize on their
//! own, so every signature goes through [`normalize`] before it is encoded.
//!
//! No curve arithmetic happens here, and a signature is never checked for
//! validity. Inputs are assumed to come from a trusted signer.
//!
//! # Example
//!
//! ```
//! use ecdsa_canon::{RawSignature, SignatureComponents, is_low_s};
//!
//! let components = SignatureComponents {
//!     r: vec![1; 32],
//!     s: vec![0xee; 32],
//!     message_hash: vec![2; 32],
//! };
//!
//! let raw = RawSignature::try_from(components).expect("32-byte parts");
//! let canon = raw.canonicalize();
//!
//! assert_eq!(canon.r, raw.r);
//! assert!(is_low_s(&canon.s));
//! ```

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{
    COORDINATE_SIZE, HASH_SIZE, PK_SIZE, SCALAR_SIZE, SEC1_UNCOMPRESSED_TAG, SIG_SIZE,
};
pub use errors::SignatureError;
pub use keys::RawPublicKey;
pub use signatures::{CanonicalSignature, RawSignature, SignatureComponents, is_low_s, normalize};
