//! JSON:API resource types returned by the relay endpoints.
//!
//! Accepted submissions are reported as a `txs` resource keyed by the
//! transaction hash:
//!
//! ```json
//! {"data": {"id": "0x…", "type": "txs", "attributes": {"tx_hash": "0x…"}}}
//! ```
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TXS_RESOURCE_TYPE: &str = "txs";

/// Top-level `data` envelope wrapping a single resource.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourceResponse<T> {
    pub data: T,
}

impl<T> ResourceResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TxResource {
    /// Resource id, the transaction hash.
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: TxAttributes,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TxAttributes {
    pub tx_hash: String,
}

impl TxResource {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        let tx_hash = tx_hash.into();
        Self {
            id: tx_hash.clone(),
            resource_type: TXS_RESOURCE_TYPE.to_string(),
            attributes: TxAttributes { tx_hash },
        }
    }
}
