//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use travel_assistant::config::AppConfig;
use travel_assistant::{CatalogStore, HttpServer, Shutdown};

/// A running API server on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server with the built-in catalog and default config.
#[allow(dead_code)]
pub async fn start_default() -> TestServer {
    start_server(AppConfig::default(), CatalogStore::builtin()).await
}

/// Start the server with the given config and catalog.
pub async fn start_server(mut config: AppConfig, catalog: Arc<CatalogStore>) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, catalog);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    wait_until_ready(addr).await;
    TestServer { addr, shutdown }
}

async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {addr} did not become ready");
}
