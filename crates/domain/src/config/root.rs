use super::upstream::parse_upstream_list;
use super::{
    ConfigError, LoggingConfig, PolicyConfig, ReceiptConfig, ResolverConfig, ServerConfig,
    UpstreamConfig,
};
use crate::validators::{validate_name, validate_url};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub resolver: ResolverConfig,
    pub upstream: UpstreamConfig,
    pub receipt: ReceiptConfig,
    pub policy: PolicyConfig,
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub doh_port: Option<u16>,
    pub dot_port: Option<u16>,
    pub receipt_dir: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Layering: defaults, then the TOML file (if any), then process
    /// environment, then CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlays environment-style keys read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("BIND_ADDRESS") {
            self.server.bind_address = v;
        }
        set_parsed(&get, "POLICY_PORT", &mut self.server.policy_port)?;
        set_parsed(&get, "UPSTREAM_PORT", &mut self.server.upstream_port)?;
        set_parsed(&get, "CACHE_PORT", &mut self.server.cache_port)?;
        set_parsed(&get, "RECEIPT_PORT", &mut self.server.receipt_port)?;
        set_parsed(&get, "DOH_PORT", &mut self.server.doh_port)?;
        set_parsed(&get, "DOT_PORT", &mut self.server.dot_port)?;

        if let Some(v) = get("POLICY_URL") {
            self.resolver.policy_url = Some(v);
        }
        if let Some(v) = get("UPSTREAM_URL") {
            self.resolver.upstream_url = Some(v);
        }
        if let Some(v) = get("CACHE_URL") {
            self.resolver.cache_url = Some(v);
        }
        if let Some(v) = get("RECEIPT_URL") {
            self.resolver.receipt_url = Some(v);
        }
        set_parsed(&get, "RESOLVER_TIMEOUT_MS", &mut self.resolver.timeout_ms)?;

        if let Some(v) = get("UPSTREAMS") {
            self.upstream.upstreams = parse_upstream_list(&v);
        }
        if let Some(v) = get("UPSTREAM_RECORD_TYPE") {
            self.upstream.record_type = v;
        }
        set_parsed(&get, "UPSTREAM_TTL", &mut self.upstream.ttl)?;
        if let Some(v) = get("UPSTREAM_RECORD") {
            self.upstream.data = v;
        }
        if let Some(v) = get("QUORUM_REQUIRED") {
            self.upstream.quorum_required = Some(parse_value("QUORUM_REQUIRED", &v)?);
        }

        if let Some(v) = get("RECEIPT_SECRET") {
            self.receipt.secret = Some(v);
        }
        if let Some(v) = get("RECEIPT_DIR") {
            self.receipt.directory = v;
        }
        if let Some(v) = get("POLICY_CONFIG") {
            self.policy.config_path = v;
        }
        if let Some(v) = get("LOG_LEVEL") {
            self.logging.level = v;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.doh_port {
            self.server.doh_port = port;
        }
        if let Some(port) = overrides.dot_port {
            self.server.dot_port = port;
        }
        if let Some(dir) = overrides.receipt_dir {
            self.receipt.directory = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than zero".into(),
            ));
        }
        validate_name(&self.resolver.default_name)
            .map_err(|e| ConfigError::Validation(format!("resolver.default_name: {e}")))?;
        if self.upstream.record_type.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream.record_type cannot be empty".into(),
            ));
        }
        for (key, url) in [
            ("resolver.policy_url", &self.resolver.policy_url),
            ("resolver.upstream_url", &self.resolver.upstream_url),
            ("resolver.cache_url", &self.resolver.cache_url),
            ("resolver.receipt_url", &self.resolver.receipt_url),
        ] {
            validate_url(url).map_err(|e| ConfigError::Validation(format!("{key}: {e}")))?;
        }
        Ok(())
    }

    /// Rejects two of the given services sharing a port. Only meaningful when
    /// those services run inside one process.
    pub fn check_port_conflicts(&self, services: &[&str]) -> Result<(), ConfigError> {
        let mut seen: HashMap<u16, &str> = HashMap::new();
        for (label, port) in self.server.ports() {
            if !services.contains(&label) {
                continue;
            }
            if let Some(other) = seen.insert(port, label) {
                return Err(ConfigError::Validation(format!(
                    "{other} and {label} both configured on port {port}"
                )));
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: raw.to_string(),
    })
}

fn set_parsed<T, G>(get: &G, key: &'static str, slot: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    if let Some(raw) = get(key) {
        *slot = parse_value(key, &raw)?;
    }
    Ok(())
}
