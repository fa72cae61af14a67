use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tolldns_infrastructure::DotServer;
use tracing::info;

pub async fn start_dot_server(bind_addr: String, server: DotServer) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&bind_addr)?;
    let listener = TcpListener::bind(socket_addr).await?;

    info!(protocol = "TCP", bind_address = %socket_addr, "DoT listener ready");

    Arc::new(server).serve(listener).await;
    Ok(())
}
