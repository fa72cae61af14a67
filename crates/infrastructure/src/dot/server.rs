use super::DotEnvelope;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tolldns_application::use_cases::ResolveNameUseCase;
use tolldns_domain::Name;
use tracing::{debug, info, warn};

const READ_BUFFER: usize = 1024;
const READ_TIMEOUT: Duration = Duration::from_secs(10);
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Raw stream listener replying with a [`DotEnvelope`].
///
/// When a resolver is attached and the received bytes are a plain UTF-8
/// name, that name goes through the same pipeline as a DoH request before
/// the envelope is sent; the pipeline's result is discarded.
pub struct DotServer {
    resolver: Option<Arc<ResolveNameUseCase>>,
}

impl DotServer {
    pub fn new() -> Self {
        Self { resolver: None }
    }

    pub fn with_resolver(mut self, resolver: Arc<ResolveNameUseCase>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Accept loop. Runs until the task is dropped; per-connection and
    /// accept errors are logged and never end the loop.
    pub async fn serve(self: Arc<Self>, listener: TcpListener) {
        if let Ok(addr) = listener.local_addr() {
            info!(bind_address = %addr, protocol = "DoT", "Stream listener ready");
        }
        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    let server = Arc::clone(&self);
                    tokio::spawn(async move {
                        if let Err(e) = server.handle(stream, peer).await {
                            debug!(peer = %peer, error = %e, "DoT connection ended with error");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "DoT accept failed");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                }
            }
        }
    }

    async fn handle(&self, mut stream: TcpStream, peer: SocketAddr) -> std::io::Result<()> {
        let mut buf = [0u8; READ_BUFFER];
        let n = match tokio::time::timeout(READ_TIMEOUT, stream.read(&mut buf)).await {
            Ok(read) => read?,
            Err(_) => {
                debug!(peer = %peer, "DoT client sent nothing before timeout");
                return Ok(());
            }
        };
        if n == 0 {
            return Ok(());
        }
        debug!(peer = %peer, bytes = n, "DoT payload received");

        if let (Some(resolver), Some(name)) = (&self.resolver, query_name(&buf[..n])) {
            if let Err(e) = resolver.execute(&name).await {
                debug!(name = %name, error = %e, "DoT-triggered resolution failed");
            }
        }

        let line = DotEnvelope::new(n).to_line()?;
        stream.write_all(&line).await?;
        stream.shutdown().await
    }
}

impl Default for DotServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a name from a payload that is a single printable UTF-8 token.
/// Anything else (binary DNS messages included) yields `None`.
fn query_name(payload: &[u8]) -> Option<Name> {
    let text = std::str::from_utf8(payload).ok()?.trim();
    if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }
    Name::parse(text).ok()
}
