use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub policy_port: u16,

    pub upstream_port: u16,

    pub cache_port: u16,

    pub receipt_port: u16,

    /// DoH-style front door
    pub doh_port: u16,

    /// DoT-style front door (raw TCP)
    pub dot_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            policy_port: 7080,
            upstream_port: 7081,
            cache_port: 7082,
            receipt_port: 7083,
            doh_port: 8053,
            dot_port: 8853,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self, port: u16) -> String {
        format!("{}:{}", self.bind_address, port)
    }

    /// Every port paired with its service label.
    pub fn ports(&self) -> [(&'static str, u16); 6] {
        [
            ("policy", self.policy_port),
            ("upstream", self.upstream_port),
            ("cache", self.cache_port),
            ("receipt", self.receipt_port),
            ("doh", self.doh_port),
            ("dot", self.dot_port),
        ]
    }
}
