//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use site_gateway::config::GatewayConfig;
use site_gateway::http::HttpServer;
use site_gateway::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Boot a gateway on an OS-assigned loopback port.
///
/// Returns the bound address and a shutdown handle; triggering it stops
/// the server. The listener is bound before the serve task spawns, so
/// requests sent immediately after this returns are queued, not refused.
pub async fn start_gateway() -> (SocketAddr, Shutdown) {
    let config = GatewayConfig::default();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.wait();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run_until(listener, signal).await;
    });

    tokio::time::sleep(Duration::from_millis(20)).await;

    (addr, shutdown)
}
