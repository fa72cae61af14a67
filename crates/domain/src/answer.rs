use crate::Name;
use serde::{Deserialize, Serialize};

/// A resolved record as served to clients and held in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: String,
}

impl Answer {
    pub fn new(record_type: impl Into<String>, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            ttl,
            data: data.into(),
        }
    }
}

/// Upstream readiness descriptor: how many upstreams must agree and how many answered.
///
/// `required` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumTally {
    pub required: u32,
    pub responded: u32,
}

impl QuorumTally {
    /// Majority threshold `floor(n/2) + 1` over `upstreams` configured sources.
    pub fn majority(upstreams: usize) -> u32 {
        let n = u32::try_from(upstreams).unwrap_or(u32::MAX);
        (n / 2).saturating_add(1)
    }

    /// Tally for `upstreams` sources with an optional operator override.
    /// An override of zero is clamped to 1.
    pub fn for_upstreams(upstreams: usize, required_override: Option<u32>) -> Self {
        let required = required_override
            .unwrap_or_else(|| Self::majority(upstreams))
            .max(1);
        Self {
            required,
            responded: u32::try_from(upstreams).unwrap_or(u32::MAX),
        }
    }

    pub fn is_met(&self) -> bool {
        self.responded >= self.required
    }
}

/// Full upstream reply: the answer plus which upstreams contributed and the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamAnswer {
    pub name: Name,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: String,
    pub upstreams: Vec<String>,
    pub quorum: QuorumTally,
}

impl UpstreamAnswer {
    pub fn answer(&self) -> Answer {
        Answer {
            record_type: self.record_type.clone(),
            ttl: self.ttl,
            data: self.data.clone(),
        }
    }
}
