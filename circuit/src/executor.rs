//! Hand-off to an external witness executor.

use ecdsa_canon::{RawPublicKey, RawSignature};
use tracing::debug;

use crate::convention::{assemble_for, CircuitInput, InputConvention};
use crate::error::ExecuteError;

/// Something that runs a circuit on an assembled input and yields a witness.
///
/// Implementations wrap a real backend (an ACVM instance, a Circom witness
/// calculator, ...). This crate never executes circuits itself.
pub trait WitnessExecutor {
    type Witness;
    type Error: std::error::Error + 'static;

    fn execute(&self, input: &CircuitInput) -> Result<Self::Witness, Self::Error>;
}

/// Assembles the input for `convention` and passes it to `executor`.
pub fn execute_signature<X: WitnessExecutor>(
    executor: &X,
    convention: InputConvention,
    signature: &RawSignature,
    public_key: &RawPublicKey,
) -> Result<X::Witness, ExecuteError<X::Error>> {
    let input = assemble_for(convention, signature, public_key)?;
    debug!(convention = %convention, "dispatching circuit input to witness executor");
    executor.execute(&input).map_err(ExecuteError::Executor)
}
