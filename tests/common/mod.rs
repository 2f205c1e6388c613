//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use quoter::config::QuoterConfig;
use quoter::http::HttpServer;
use quoter::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with the given configuration.
pub async fn start_server(config: QuoterConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// HTTP client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Valid query parameters used as the base of most scenarios.
#[allow(dead_code)]
pub fn base_params() -> Vec<(&'static str, String)> {
    vec![
        ("vehicle_type", "semitrailer".to_string()),
        ("brand", "GRUNWALD".to_string()),
        ("year", "2016".to_string()),
        ("price", "5000000".to_string()),
        ("downpayment", "0.1".to_string()),
        ("VAT_included", "yes".to_string()),
    ]
}

/// Replace or add a single parameter.
#[allow(dead_code)]
pub fn with(
    mut params: Vec<(&'static str, String)>,
    key: &'static str,
    value: &str,
) -> Vec<(&'static str, String)> {
    params.retain(|(k, _)| *k != key);
    params.push((key, value.to_string()));
    params
}
