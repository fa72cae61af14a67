use serde::{Deserialize, Serialize};

/// Quorum upstream settings: the configured upstream set and the canned
/// answer reported for every query.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub upstreams: Vec<String>,

    pub record_type: String,

    pub ttl: u32,

    pub data: String,

    /// Explicit quorum; majority of `upstreams` when unset
    pub quorum_required: Option<u32>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            upstreams: vec!["cloudflare".to_string(), "google".to_string()],
            record_type: "A".to_string(),
            ttl: 60,
            data: "203.0.113.10".to_string(),
            quorum_required: None,
        }
    }
}

/// Parses a comma separated upstream list, dropping blank items.
pub fn parse_upstream_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
