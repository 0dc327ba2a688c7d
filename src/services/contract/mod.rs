//! Typed binding for the on-chain registration contract.
use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
    sol_types::SolCall,
};

use crate::constants::REGISTRATION_NO_DEADLINE;
use crate::domain::RegistrationMaterial;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    interface Registration {
        struct ProofPoints {
            uint256[2] a;
            uint256[2][2] b;
            uint256[2] c;
        }

        function register(
            bytes32 internalPublicKeyX,
            bytes32 internalPublicKeyY,
            bytes signatureS,
            bytes signatureN,
            ProofPoints proofPoints,
            uint256 packedDate,
            uint256 deadline
        ) external;
    }
}

/// Encoder for calls against a deployed registration contract instance.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationContract {
    address: Address,
}

impl RegistrationContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// ABI-encodes `register(...)` calldata for decoded submission material.
    ///
    /// The deadline argument is pinned to zero, which the contract treats as
    /// "no deadline".
    pub fn register_calldata(&self, material: &RegistrationMaterial) -> Bytes {
        Registration::registerCall {
            internalPublicKeyX: material.public_key_x,
            internalPublicKeyY: material.public_key_y,
            signatureS: material.signature_s.clone(),
            signatureN: material.signature_n.clone(),
            proofPoints: Registration::ProofPoints {
                a: material.proof_a,
                b: material.proof_b,
                c: material.proof_c,
            },
            packedDate: U256::from(material.packed_date),
            deadline: U256::from(REGISTRATION_NO_DEADLINE),
        }
        .abi_encode()
        .into()
    }
}
