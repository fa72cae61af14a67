//! # TollDNS
//!
//! Policy-gated name resolution with signed receipts. Each component can run
//! as its own HTTP service or all of them in one process.

mod bootstrap;
mod di;
mod server;

use bootstrap::{init_logging, load_config, log_config_summary};
use clap::{Parser, Subcommand};
use di::Components;
use std::sync::Arc;
use tokio::task::JoinSet;
use tolldns_api::{
    create_cache_routes, create_policy_routes, create_receipt_routes, create_resolver_routes,
    create_upstream_routes, CacheState, PolicyServiceState, ReceiptState, ResolverState,
    UpstreamState,
};
use tolldns_domain::{CliOverrides, Config};
use tolldns_infrastructure::DotServer;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tolldns")]
#[command(version)]
#[command(about = "Policy-gated DNS resolution with signed receipts")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Bind address for every listener
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// DoH front door port
    #[arg(long, global = true)]
    doh_port: Option<u16>,

    /// DoT front door port
    #[arg(long, global = true)]
    dot_port: Option<u16>,

    /// Directory receipts are written to
    #[arg(long, global = true)]
    receipt_dir: Option<String>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum Command {
    /// Serve the policy file over HTTP
    Policy,
    /// Run the answer cache service
    Cache,
    /// Run the upstream quorum service
    Upstream,
    /// Run the receipt signer service
    Receipt,
    /// Run the DoH and DoT front doors
    Resolver,
    /// Run every service in one process
    All,
}

impl Command {
    fn services(self) -> &'static [&'static str] {
        match self {
            Command::Policy => &["policy"],
            Command::Cache => &["cache"],
            Command::Upstream => &["upstream"],
            Command::Receipt => &["receipt"],
            Command::Resolver => &["doh", "dot"],
            Command::All => &["policy", "upstream", "cache", "receipt", "doh", "dot"],
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::All);

    let overrides = CliOverrides {
        bind_address: cli.bind,
        doh_port: cli.doh_port,
        dot_port: cli.dot_port,
        receipt_dir: cli.receipt_dir,
        log_level: cli.log_level,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config_summary(&config, cli.config.as_deref());
    config.check_port_conflicts(command.services())?;

    info!(mode = ?command, "TollDNS starting");

    let components = Components::from_config(&config, command.services())?;
    let mut services = JoinSet::new();
    for service in command.services() {
        spawn_service(&mut services, service, &config, &components)?;
    }

    tokio::select! {
        Some(joined) = services.join_next() => {
            match joined {
                Ok(Ok(())) => info!("Service exited"),
                Ok(Err(e)) => {
                    error!(error = %e, "Service failed");
                    return Err(e);
                }
                Err(e) => {
                    error!(error = %e, "Service task panicked");
                    return Err(e.into());
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown requested");
        }
    }

    services.shutdown().await;
    Ok(())
}

fn spawn_service(
    services: &mut JoinSet<anyhow::Result<()>>,
    service: &'static str,
    config: &Config,
    components: &Components,
) -> anyhow::Result<()> {
    let server = &config.server;
    match service {
        "policy" => {
            let app = create_policy_routes(PolicyServiceState {
                source: components.policy_source.clone(),
            });
            let addr = server.socket_addr(server.policy_port);
            services.spawn(server::start_web_server(service, addr, app));
        }
        "cache" => {
            let app = create_cache_routes(CacheState {
                cache: components.cache.clone(),
            });
            let addr = server.socket_addr(server.cache_port);
            services.spawn(server::start_web_server(service, addr, app));
        }
        "upstream" => {
            let app = create_upstream_routes(UpstreamState {
                upstream: components.upstream.clone(),
                default_name: components.default_name.clone(),
            });
            let addr = server.socket_addr(server.upstream_port);
            services.spawn(server::start_web_server(service, addr, app));
        }
        "receipt" => {
            let app = create_receipt_routes(ReceiptState {
                signer: components.signer()?,
            });
            let addr = server.socket_addr(server.receipt_port);
            services.spawn(server::start_web_server(service, addr, app));
        }
        "doh" => {
            let app = create_resolver_routes(ResolverState {
                resolve: Arc::new(components.resolver(config)?),
                default_name: components.default_name.clone(),
            });
            let addr = server.socket_addr(server.doh_port);
            services.spawn(server::start_web_server(service, addr, app));
        }
        "dot" => {
            let dot = DotServer::new().with_resolver(Arc::new(components.resolver(config)?));
            let addr = server.socket_addr(server.dot_port);
            services.spawn(server::start_dot_server(addr, dot));
        }
        other => anyhow::bail!("unknown service label: {other}"),
    }
    Ok(())
}
