use serde::{Deserialize, Serialize};

/// Diagnostic reply sent instead of a DNS message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotEnvelope {
    pub protocol: String,
    pub bytes: usize,
    pub timestamp: i64,
}

impl DotEnvelope {
    pub fn new(bytes: usize) -> Self {
        Self {
            protocol: "dot".to_string(),
            bytes,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Compact JSON followed by a newline.
    pub fn to_line(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}
