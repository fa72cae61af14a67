use async_trait::async_trait;
use tolldns_domain::{Answer, DomainError, Name};

/// Shared name -> answer store.
#[async_trait]
pub trait AnswerCache: Send + Sync {
    /// Returns the stored answer, `Ok(None)` on a miss.
    async fn get(&self, name: &Name) -> Result<Option<Answer>, DomainError>;

    /// Stores `answer` for `name`, replacing any previous entry.
    async fn put(&self, name: &Name, answer: Answer) -> Result<(), DomainError>;
}
