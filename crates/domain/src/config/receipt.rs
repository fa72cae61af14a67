use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// HMAC secret. A random ephemeral secret is generated when unset.
    pub secret: Option<String>,

    /// Directory receipts are written to
    pub directory: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            secret: None,
            directory: "./receipts".to_string(),
        }
    }
}
