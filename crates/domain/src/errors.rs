use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{collaborator} unavailable: {reason}")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        reason: String,
    },

    #[error("Upstream unavailable for {0}")]
    UpstreamUnavailable(String),

    #[error("Receipt storage failed: {0}")]
    ReceiptStorage(String),

    #[error("Policy source error: {0}")]
    PolicySource(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn unavailable(collaborator: &'static str, reason: impl Into<String>) -> Self {
        Self::CollaboratorUnavailable {
            collaborator,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
