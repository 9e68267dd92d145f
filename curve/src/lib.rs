//! P-256 group constants and big-endian integer helpers.
//!
//! This crate holds the pieces of the signature pipeline that only deal with
//! numbers: the P-256 group order, a fixed-width [`U256`] for the hot path,
//! and a [`codec`] for arbitrary-length byte strings. It performs no
//! elliptic-curve arithmetic.

pub mod codec;
mod error;
pub mod params;
mod uint;

pub use error::CodecError;
pub use params::{HALF_ORDER, ORDER, SCALAR_BYTES};
pub use uint::{U256, U256_BYTES};
