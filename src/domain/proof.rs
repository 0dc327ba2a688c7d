//! Decoding of registration submissions into contract-ready material.
//!
//! A submission arrives as JSON strings: hex for key coordinates and
//! signature parts, decimal or `0x`-prefixed hex for the proof integers.
//! Everything is decoded up front so a malformed field fails the request
//! before any chain interaction happens.
use alloy::primitives::{Bytes, B256, U256};

use crate::domain::pack_calendar_date;
use crate::models::{RegisterData, RelayerError};

/// Fully decoded arguments for a registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationMaterial {
    pub public_key_x: B256,
    pub public_key_y: B256,
    pub signature_s: Bytes,
    pub signature_n: Bytes,
    pub proof_a: [U256; 2],
    pub proof_b: [[U256; 2]; 2],
    pub proof_c: [U256; 2],
    pub packed_date: u32,
}

impl RegistrationMaterial {
    /// Decodes every field of a register request, failing atomically on the
    /// first malformed one.
    pub fn from_request(request: &RegisterData) -> Result<Self, RelayerError> {
        let public_key_x = decode_word("internal public key x", &request.internal_public_key.x)?;
        let public_key_y = decode_word("internal public key y", &request.internal_public_key.y)?;
        let signature_s = decode_bytes("signature s", &request.signature.s)?;
        let signature_n = decode_bytes("signature n", &request.signature.n)?;

        let proof_a = [
            parse_proof_int("a[0]", &request.proof.a[0])?,
            parse_proof_int("a[1]", &request.proof.a[1])?,
        ];
        let proof_b = [
            [
                parse_proof_int("b[0][0]", &request.proof.b[0][0])?,
                parse_proof_int("b[0][1]", &request.proof.b[0][1])?,
            ],
            [
                parse_proof_int("b[1][0]", &request.proof.b[1][0])?,
                parse_proof_int("b[1][1]", &request.proof.b[1][1])?,
            ],
        ];
        let proof_c = [
            parse_proof_int("c[0]", &request.proof.c[0])?,
            parse_proof_int("c[1]", &request.proof.c[1])?,
        ];

        let packed_date = pack_calendar_date(request.timestamp)?;

        Ok(Self {
            public_key_x,
            public_key_y,
            signature_s: signature_s.into(),
            signature_n: signature_n.into(),
            proof_a,
            proof_b,
            proof_c,
            packed_date,
        })
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn decode_bytes(field: &str, value: &str) -> Result<Vec<u8>, RelayerError> {
    hex::decode(strip_hex_prefix(value.trim()))
        .map_err(|_| RelayerError::Decode(field.to_string()))
}

/// Decodes a hex string into a fixed 32-byte word.
///
/// Decoded bytes fill the word from the front: short input leaves trailing
/// zeros, input beyond 32 bytes is dropped.
pub fn decode_word(field: &str, value: &str) -> Result<B256, RelayerError> {
    let bytes = decode_bytes(field, value)?;

    let mut word = [0u8; 32];
    let len = bytes.len().min(32);
    word[..len].copy_from_slice(&bytes[..len]);
    Ok(B256::from(word))
}

/// Parses a proof integer: base 10, or base 16 when `0x`-prefixed.
pub fn parse_proof_int(field: &str, value: &str) -> Result<U256, RelayerError> {
    let trimmed = value.trim();
    let result = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex_digits) => U256::from_str_radix(hex_digits, 16),
        None => U256::from_str_radix(trimmed, 10),
    };

    result.map_err(|_| RelayerError::Parse(field.to_string()))
}
