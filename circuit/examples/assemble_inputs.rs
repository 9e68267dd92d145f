//! Signs a message with fresh P-256 keys and prints the circuit inputs for
//! both conventions, one JSON object per line.
//!
//! Usage: `cargo run -p circuit --example assemble_inputs -- [ITERATIONS] [CONVENTION]`
//!
//! Set `RUST_LOG=circuit=debug,ecdsa_canon=trace` to see canonicalization events.

use circuit::{assemble_for, InputConvention, RawPublicKey, RawSignature, SignatureComponents};
use clap::Parser;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use rand::{rng, Rng};
use sha2::{Digest, Sha256};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Assemble P-256 circuit inputs from freshly signed messages")]
struct Args {
    /// Number of signatures to produce
    #[arg(default_value_t = 1)]
    iterations: usize,

    /// Only emit this convention (byte_decimal, base43_chunks or an alias);
    /// both are emitted when omitted
    convention: Option<InputConvention>,
}

impl Args {
    fn conventions(&self) -> Vec<InputConvention> {
        match self.convention {
            Some(convention) => vec![convention],
            None => vec![InputConvention::ByteDecimal, InputConvention::Base43Chunks],
        }
    }
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let conventions = args.conventions();
    let message = b"Hello world";
    let mut rng = rng();
    let start = Instant::now();

    for _ in 0..args.iterations {
        let signing_key = loop {
            let bytes: [u8; 32] = rng.random();
            if let Ok(sk) = SigningKey::from_slice(&bytes) {
                break sk;
            }
        };
        let signature: Signature = signing_key.sign(message);
        let bytes = signature.to_bytes();

        // Same shape the signer hands over on the wire.
        let components = SignatureComponents {
            r: bytes[..32].to_vec(),
            s: bytes[32..].to_vec(),
            message_hash: Sha256::digest(message).to_vec(),
        };
        let raw = RawSignature::try_from(components).expect("signature components");
        let key = RawPublicKey::from_sec1_bytes(
            signing_key.verifying_key().to_encoded_point(false).as_bytes(),
        )
        .expect("public key");

        for &convention in &conventions {
            let input = assemble_for(convention, &raw, &key).expect("assemble");
            println!("{}", input.to_json().expect("json"));
        }
    }

    eprintln!(
        "assembled {} input(s) in {:.2?}",
        args.iterations * conventions.len(),
        start.elapsed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_emit_both_conventions() {
        let args = Args::try_parse_from(["assemble_inputs"]).unwrap();
        assert_eq!(args.iterations, 1);
        assert_eq!(args.convention, None);
        assert_eq!(args.conventions().len(), 2);
    }

    #[test]
    fn test_convention_accepts_aliases() {
        let args = Args::try_parse_from(["assemble_inputs", "3", "circom"]).unwrap();
        assert_eq!(args.iterations, 3);
        assert_eq!(args.conventions(), vec![InputConvention::Base43Chunks]);

        let args = Args::try_parse_from(["assemble_inputs", "1", "byte_decimal"]).unwrap();
        assert_eq!(args.convention, Some(InputConvention::ByteDecimal));
    }

    #[test]
    fn test_bad_arguments_are_usage_errors() {
        let err = Args::try_parse_from(["assemble_inputs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["assemble_inputs", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Args::try_parse_from(["assemble_inputs", "2", "base10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown input convention: base10"));
    }
}
