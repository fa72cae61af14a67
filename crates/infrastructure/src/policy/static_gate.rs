use async_trait::async_trait;
use tolldns_application::ports::PolicyGate;
use tolldns_domain::{DomainError, PolicyDecision, PolicyState};

/// Gate that always answers with one fixed state.
pub struct StaticPolicyGate {
    decision: PolicyDecision,
}

impl StaticPolicyGate {
    pub fn new(state: PolicyState) -> Self {
        Self {
            decision: PolicyDecision::new(state),
        }
    }
}

#[async_trait]
impl PolicyGate for StaticPolicyGate {
    async fn current_policy(&self) -> Result<PolicyDecision, DomainError> {
        Ok(self.decision.clone())
    }
}
