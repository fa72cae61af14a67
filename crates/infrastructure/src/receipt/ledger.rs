use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tolldns_domain::{DomainError, SignedReceipt};
use tracing::debug;

/// Durable home for signed receipts, keyed by receipt id.
#[async_trait]
pub trait ReceiptLedger: Send + Sync {
    /// Persists `receipt` and returns where it was written.
    async fn store(&self, receipt: &SignedReceipt) -> Result<String, DomainError>;

    async fn fetch(&self, id: &str) -> Result<Option<SignedReceipt>, DomainError>;
}

/// One pretty-printed JSON file per receipt: `<dir>/receipt-<id>.json`.
pub struct FileReceiptLedger {
    directory: PathBuf,
}

impl FileReceiptLedger {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, DomainError> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Err(DomainError::InvalidRequest(format!("invalid receipt id: {id}")));
        }
        Ok(self.directory.join(format!("receipt-{id}.json")))
    }
}

#[async_trait]
impl ReceiptLedger for FileReceiptLedger {
    async fn store(&self, receipt: &SignedReceipt) -> Result<String, DomainError> {
        let path = self.path_for(receipt.id())?;
        let body = serde_json::to_vec_pretty(receipt)?;

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| {
                DomainError::ReceiptStorage(format!(
                    "cannot create {}: {e}",
                    self.directory.display()
                ))
            })?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| DomainError::ReceiptStorage(format!("cannot write {}: {e}", path.display())))?;

        debug!(path = %path.display(), "Receipt written");
        Ok(path.display().to_string())
    }

    async fn fetch(&self, id: &str) -> Result<Option<SignedReceipt>, DomainError> {
        let path = self.path_for(id)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::ReceiptStorage(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Process-local ledger, used when no receipt directory is wanted and in tests.
#[derive(Default)]
pub struct MemoryReceiptLedger {
    receipts: RwLock<HashMap<String, SignedReceipt>>,
}

impl MemoryReceiptLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }

    pub async fn all(&self) -> Vec<SignedReceipt> {
        self.receipts.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl ReceiptLedger for MemoryReceiptLedger {
    async fn store(&self, receipt: &SignedReceipt) -> Result<String, DomainError> {
        let id = receipt.id().to_string();
        let location = format!("memory://receipt-{id}");
        self.receipts.write().await.insert(id, receipt.clone());
        Ok(location)
    }

    async fn fetch(&self, id: &str) -> Result<Option<SignedReceipt>, DomainError> {
        Ok(self.receipts.read().await.get(id).cloned())
    }
}
