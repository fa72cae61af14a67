use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// JSON policy document served by `GET /policy`
    pub config_path: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            config_path: "./config/policy.json".to_string(),
        }
    }
}
