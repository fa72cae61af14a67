use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tolldns_application::ports::PolicyGate;
use tolldns_domain::{DomainError, PolicyDecision};
use tracing::debug;

/// Policy document on disk, re-read on every lookup so edits apply without
/// a restart.
///
/// An unreadable or malformed document is reported as
/// `DomainError::PolicySource`; callers decide how to degrade.
pub struct FilePolicySource {
    path: PathBuf,
}

impl FilePolicySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<PolicyDecision, DomainError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::PolicySource(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let decision: PolicyDecision = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::PolicySource(format!("invalid policy in {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), state = %decision.state, "Policy loaded");
        Ok(decision)
    }
}

#[async_trait]
impl PolicyGate for FilePolicySource {
    async fn current_policy(&self) -> Result<PolicyDecision, DomainError> {
        self.load().await
    }
}
