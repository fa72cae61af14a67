use serde::{Deserialize, Serialize};
use tolldns_domain::SignedReceipt;

/// A stored receipt plus whether its signature checks out under this
/// process's secret.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoredReceiptResponse {
    #[serde(flatten)]
    pub receipt: SignedReceipt,
    pub verified: bool,
}
