//! Selection of the circuit input convention.
//!
//! Two circuits consume P-256 signatures with different input layouts. The
//! layout can be chosen explicitly (config file, CLI flag, `FromStr`) or read
//! off the parameter names a compiled circuit artifact declares in its ABI.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

use ecdsa_canon::{RawPublicKey, RawSignature};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CircuitError;
use crate::witness::{assemble, assemble_chunked, ChunkedCircuitInput, CircuitWitnessInput};

const BYTE_DECIMAL_PARAMS: [&str; 4] = ["hashed_message", "pub_key_x", "pub_key_y", "signature"];
const BASE43_PARAMS: [&str; 5] = ["r", "s", "hash", "pub0", "pub1"];

/// Input layout expected by the consuming circuit.
///
/// Parses from its canonical name (`byte_decimal`, `base43_chunks`) or from
/// an alias:
///
/// | alias              | convention                            |
/// |--------------------|---------------------------------------|
/// | `bytes`, `noir`    | [`ByteDecimal`](Self::ByteDecimal)    |
/// | `chunks`, `circom` | [`Base43Chunks`](Self::Base43Chunks)  |
///
/// `Display` and serde always use the canonical name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputConvention {
    /// One decimal string per byte ([`CircuitWitnessInput`]).
    #[default]
    ByteDecimal,
    /// Six 43-bit limbs per value ([`ChunkedCircuitInput`]).
    Base43Chunks,
}

impl InputConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputConvention::ByteDecimal => "byte_decimal",
            InputConvention::Base43Chunks => "base43_chunks",
        }
    }

    /// Picks the convention whose parameter names the ABI declares.
    ///
    /// Parameter order and visibility are ignored; the name set has to match
    /// exactly.
    pub fn detect(abi: &CircuitAbi) -> Result<Self, CircuitError> {
        let names: BTreeSet<&str> = abi.parameters.iter().map(|p| p.name.as_str()).collect();

        let convention = if names == BTreeSet::from(BYTE_DECIMAL_PARAMS) {
            InputConvention::ByteDecimal
        } else if names == BTreeSet::from(BASE43_PARAMS) {
            InputConvention::Base43Chunks
        } else {
            return Err(CircuitError::UnknownLayout(
                abi.parameters.iter().map(|p| p.name.clone()).collect(),
            ));
        };

        debug!(convention = %convention, "detected circuit input convention");
        Ok(convention)
    }
}

impl fmt::Display for InputConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputConvention {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "byte_decimal" | "bytes" | "noir" => Ok(InputConvention::ByteDecimal),
            "base43_chunks" | "chunks" | "circom" => Ok(InputConvention::Base43Chunks),
            other => Err(CircuitError::UnknownConvention(other.to_string())),
        }
    }
}

/// The part of a compiled circuit artifact that declares its inputs.
///
/// Unknown fields in the artifact are ignored, so a full Noir program JSON
/// can be parsed with [`CircuitAbi::from_artifact_json`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitAbi {
    pub parameters: Vec<AbiParameter>,
}

/// One declared circuit parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Deserialize)]
struct Artifact {
    abi: CircuitAbi,
}

impl CircuitAbi {
    /// Extracts the ABI from a compiled program (`{"abi": {"parameters": [..]}, ..}`).
    pub fn from_artifact_json(json: &str) -> Result<Self, CircuitError> {
        let artifact: Artifact = serde_json::from_str(json)?;
        Ok(artifact.abi)
    }
}

/// A circuit input in either convention.
///
/// Serializes untagged, so the JSON is exactly the executor's input map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CircuitInput {
    ByteDecimal(CircuitWitnessInput),
    Base43Chunks(ChunkedCircuitInput),
}

impl CircuitInput {
    pub fn convention(&self) -> InputConvention {
        match self {
            CircuitInput::ByteDecimal(_) => InputConvention::ByteDecimal,
            CircuitInput::Base43Chunks(_) => InputConvention::Base43Chunks,
        }
    }

    /// Serializes the input map handed to the witness executor.
    pub fn to_json(&self) -> Result<String, CircuitError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, CircuitError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Assembles the input record for `convention`.
pub fn assemble_for(
    convention: InputConvention,
    signature: &RawSignature,
    public_key: &RawPublicKey,
) -> Result<CircuitInput, CircuitError> {
    let input = match convention {
        InputConvention::ByteDecimal => CircuitInput::ByteDecimal(assemble(signature, public_key)),
        InputConvention::Base43Chunks => {
            CircuitInput::Base43Chunks(assemble_chunked(signature, public_key)?)
        }
    };
    Ok(input)
}
