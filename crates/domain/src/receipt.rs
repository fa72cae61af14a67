use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed portion of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptPayload {
    pub id: String,
    pub timestamp: i64,
    pub payload: Value,
}

/// Persisted receipt: `{payload: {id, timestamp, payload}, signature}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedReceipt {
    pub payload: ReceiptPayload,
    pub signature: String,
}

impl SignedReceipt {
    pub fn id(&self) -> &str {
        &self.payload.id
    }
}

/// Acknowledgement returned by `submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptTicket {
    pub id: String,
    pub location: String,
}
