//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use config_bootstrap::{Bootstrap, ConfigClient, Settings};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A mock config server answering fixed responses by request path.
pub struct MockConfigServer {
    pub addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockConfigServer {
    /// Paths requested so far, in arrival order.
    #[allow(dead_code)]
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a mock server. Unknown paths get `404 Not Found` with a plain body.
pub async fn start_config_server(routes: &[(&str, u16, &str)]) -> MockConfigServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
        routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));

    let server_hits = hits.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let routes = routes.clone();
                    let hits = server_hits.clone();
                    tokio::spawn(async move {
                        serve(socket, &routes, &hits).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockConfigServer { addr, hits }
}

async fn serve(
    mut socket: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    hits: &Mutex<Vec<String>>,
) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or((404, "Not Found".to_string()));
    let status_text = match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Settings pointing at `server_url` for app `orders`.
#[allow(dead_code)]
pub fn settings(server_url: &str, profiles: &[&str], optional: bool) -> Settings {
    Settings {
        profiles: profiles.iter().map(|p| p.to_string()).collect(),
        server_url: server_url.to_string(),
        app_name: "orders".to_string(),
        optional,
    }
}

/// Bootstrap with a client that bypasses system proxies.
#[allow(dead_code)]
pub fn bootstrap(settings: Settings) -> Bootstrap {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    Bootstrap::with_client(settings, ConfigClient::with_http_client(http))
}

/// A config document with one property source per `(name, source-json)` pair.
pub fn document(sources: &[(&str, &str)]) -> String {
    let sources: Vec<String> = sources
        .iter()
        .map(|(name, source)| format!(r#"{{"name": "{}", "source": {}}}"#, name, source))
        .collect();
    format!(
        r#"{{"name": "orders", "profiles": ["x"], "label": null, "version": "v1", "state": null, "propertySources": [{}]}}"#,
        sources.join(",")
    )
}
