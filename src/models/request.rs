//! Request bodies accepted by the relay endpoints.
//!
//! Both endpoints wrap their payload in a `data` envelope. Field arity of the
//! proof arrays is enforced by deserialization, so malformed shapes are
//! rejected before any decoding work happens.
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub data: CreateAccountData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountData {
    /// Hex-encoded transaction payload, relayed verbatim as a contract
    /// creation.
    pub tx_data: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub data: RegisterData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterData {
    pub internal_public_key: PublicKeyCoordinates,
    pub signature: SignatureParts,
    pub proof: ZkProof,
    /// Unix timestamp in seconds, interpreted as a UTC calendar date.
    pub timestamp: i64,
}

/// Affine public key coordinates, hex-encoded.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PublicKeyCoordinates {
    pub x: String,
    pub y: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignatureParts {
    pub s: String,
    pub n: String,
}

/// Groth16 proof points as decimal or 0x-prefixed hex integer strings.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ZkProof {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
}
