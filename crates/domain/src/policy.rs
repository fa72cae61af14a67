use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Policy verdict reported by the external gate.
///
/// Unrecognised states are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyState {
    Allow,
    Block,
    Unknown,
    Other(String),
}

impl PolicyState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Allow => "ALLOW",
            Self::Block => "BLOCK",
            Self::Unknown => "UNKNOWN",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PolicyState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ALLOW" => Self::Allow,
            "BLOCK" => Self::Block,
            "UNKNOWN" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<PolicyState> for String {
    fn from(state: PolicyState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for PolicyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned by `GET /policy`: a `state` plus whatever else the
/// policy document carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub state: PolicyState,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolicyDecision {
    pub fn new(state: PolicyState) -> Self {
        Self {
            state,
            extra: Map::new(),
        }
    }

    /// Degraded decision used when the gate is unreachable or malformed.
    pub fn unknown() -> Self {
        Self::new(PolicyState::Unknown)
    }
}
