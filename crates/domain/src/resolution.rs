use crate::{Answer, Name, PolicyDecision};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionSource {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "upstream-quorum")]
    UpstreamQuorum,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::UpstreamQuorum => "upstream-quorum",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one pipeline run. Returned to the front door and submitted
/// to the receipt ledger unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub name: Name,
    pub policy: PolicyDecision,
    pub answer: Answer,
    pub source: Option<ResolutionSource>,
}
