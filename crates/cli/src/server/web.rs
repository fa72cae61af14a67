use axum::Router;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;
use tracing::info;

pub async fn start_web_server(
    service: &'static str,
    bind_addr: String,
    app: Router,
) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&bind_addr)?;
    let listener = TcpListener::bind(socket_addr).await?;

    info!(service, bind_address = %socket_addr, "HTTP service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
