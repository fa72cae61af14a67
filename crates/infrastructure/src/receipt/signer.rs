use super::canonical::canonical_bytes;
use super::{ReceiptLedger, SigningSecret};
use async_trait::async_trait;
use ring::hmac;
use ring::rand::{SecureRandom, SystemRandom};
use serde_json::Value;
use std::sync::Arc;
use tolldns_application::ports::ReceiptSink;
use tolldns_domain::config::ReceiptConfig;
use tolldns_domain::{DomainError, ReceiptPayload, ReceiptTicket, ResolutionResult, SignedReceipt};
use tracing::{info, instrument, warn};

/// HMAC-SHA256 of `bytes` under `secret`, lowercase hex.
pub fn sign_bytes(secret: &[u8], bytes: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    hex::encode(hmac::sign(&key, bytes).as_ref())
}

/// Builds, signs and stores audit receipts.
///
/// The HMAC key is derived once at construction and shared
/// read-only across tasks.
pub struct ReceiptSigner {
    key: hmac::Key,
    ledger: Arc<dyn ReceiptLedger>,
    rng: SystemRandom,
}

impl ReceiptSigner {
    pub fn new(secret: SigningSecret, ledger: Arc<dyn ReceiptLedger>) -> Self {
        if secret.is_ephemeral() {
            warn!(
                "No receipt secret configured; generated an ephemeral one. \
                 Receipts from this process will not verify anywhere else"
            );
        }
        let key = hmac::Key::new(hmac::HMAC_SHA256, secret.bytes());
        Self {
            key,
            ledger,
            rng: SystemRandom::new(),
        }
    }

    pub fn from_config(
        config: &ReceiptConfig,
        ledger: Arc<dyn ReceiptLedger>,
    ) -> Result<Self, DomainError> {
        let secret = SigningSecret::from_config(config.secret.as_deref())?;
        Ok(Self::new(secret, ledger))
    }


    /// Signs the canonical serialization of `payload`.
    pub fn sign(&self, payload: &ReceiptPayload) -> Result<String, DomainError> {
        let bytes = canonical_bytes(payload)?;
        Ok(hex::encode(hmac::sign(&self.key, &bytes).as_ref()))
    }

    /// Constant-time check that `receipt.signature` matches its payload.
    pub fn verify(&self, receipt: &SignedReceipt) -> bool {
        let Ok(bytes) = canonical_bytes(&receipt.payload) else {
            return false;
        };
        let Ok(expected) = hex::decode(&receipt.signature) else {
            return false;
        };
        hmac::verify(&self.key, &bytes, &expected).is_ok()
    }

    /// Wraps `record` with a fresh id and the current unix time, signs it and
    /// hands it to the ledger.
    #[instrument(skip(self, record))]
    pub async fn submit(&self, record: Value) -> Result<ReceiptTicket, DomainError> {
        let id = self.new_receipt_id()?;
        let payload = ReceiptPayload {
            id: id.clone(),
            timestamp: chrono::Utc::now().timestamp(),
            payload: record,
        };
        let signature = self.sign(&payload)?;
        let receipt = SignedReceipt { payload, signature };

        let location = self.ledger.store(&receipt).await?;

        info!(receipt_id = %id, location = %location, "Receipt signed");
        Ok(ReceiptTicket { id, location })
    }

    /// Looks a stored receipt up by id.
    pub async fn fetch(&self, id: &str) -> Result<Option<SignedReceipt>, DomainError> {
        self.ledger.fetch(id).await
    }

    /// 128 random bits rendered as a version-4 UUID.
    fn new_receipt_id(&self) -> Result<String, DomainError> {
        let mut b = [0u8; 16];
        self.rng
            .fill(&mut b)
            .map_err(|_| DomainError::ReceiptStorage("system RNG unavailable".into()))?;
        b[6] = (b[6] & 0x0f) | 0x40;
        b[8] = (b[8] & 0x3f) | 0x80;
        Ok(format!(
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16])
        ))
    }
}

#[async_trait]
impl ReceiptSink for ReceiptSigner {
    async fn submit(&self, result: &ResolutionResult) -> Result<ReceiptTicket, DomainError> {
        let record = serde_json::to_value(result)?;
        ReceiptSigner::submit(self, record).await
    }
}
