use tolldns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once logging is initialized.
pub fn log_config_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        policy_port = config.server.policy_port,
        upstream_port = config.server.upstream_port,
        cache_port = config.server.cache_port,
        receipt_port = config.server.receipt_port,
        doh_port = config.server.doh_port,
        dot_port = config.server.dot_port,
        "Configuration loaded"
    );
}
