use async_trait::async_trait;
use tolldns_application::ports::UpstreamResolver;
use tolldns_domain::config::UpstreamConfig;
use tolldns_domain::{Answer, DomainError, Name, QuorumTally, UpstreamAnswer};
use tracing::{debug, info, warn};

/// Canned quorum responder.
///
/// Reports the whole configured upstream set as having responded and a
/// `required` threshold of either the operator override or a simple
/// majority. No upstream is contacted and no answers are compared, so the
/// tally describes readiness only; it cannot detect an unavailable or
/// disagreeing upstream.
// TODO: query each upstream and require majority agreement on the answer
// before `quorum` is trusted for anything beyond display.
pub struct QuorumUpstream {
    upstreams: Vec<String>,
    answer: Answer,
    tally: QuorumTally,
}

impl QuorumUpstream {
    pub fn new(upstreams: Vec<String>, answer: Answer, required_override: Option<u32>) -> Self {
        let tally = QuorumTally::for_upstreams(upstreams.len(), required_override);
        if upstreams.is_empty() {
            warn!("Quorum upstream configured with no upstream identifiers");
        }
        if !tally.is_met() {
            warn!(
                required = tally.required,
                configured = upstreams.len(),
                "Quorum override exceeds configured upstream set"
            );
        }
        info!(
            upstreams = upstreams.len(),
            required = tally.required,
            "Quorum upstream ready"
        );
        Self {
            upstreams,
            answer,
            tally,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(
            config.upstreams.clone(),
            Answer::new(config.record_type.clone(), config.ttl, config.data.clone()),
            config.quorum_required,
        )
    }

    pub fn query(&self, name: &Name) -> UpstreamAnswer {
        debug!(name = %name, "Answering from quorum upstream");
        UpstreamAnswer {
            name: name.clone(),
            record_type: self.answer.record_type.clone(),
            ttl: self.answer.ttl,
            data: self.answer.data.clone(),
            upstreams: self.upstreams.clone(),
            quorum: self.tally,
        }
    }
}

#[async_trait]
impl UpstreamResolver for QuorumUpstream {
    async fn query(&self, name: &Name) -> Result<UpstreamAnswer, DomainError> {
        Ok(QuorumUpstream::query(self, name))
    }
}
