//! Site server - HTTP server for the single page and the enhancement API
//!
//! The page talks to `POST /api/enhance`; input validation (trimming, length
//! bound, mode parsing) happens here so the webhook client stays a pure
//! send-and-normalize component.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::service::{EnhancementMode, WebhookClient};

use super::templates::PAGE_HTML;

/// Maximum request body size (64 KiB)
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Site HTTP server
pub struct SiteServer {
    config: Arc<Config>,
    client: Arc<WebhookClient>,
    port: Arc<RwLock<u16>>,
    running: Arc<RwLock<bool>>,
}

impl SiteServer {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = Arc::new(WebhookClient::new(&config)?);
        let port = config.listen_port;

        Ok(Self {
            config,
            client,
            port: Arc::new(RwLock::new(port)),
            running: Arc::new(RwLock::new(false)),
        })
    }

    /// Start the HTTP server. Scans upward from the configured port when the
    /// port is busy; a configured port of 0 binds an ephemeral port.
    pub async fn start(&self) -> Result<()> {
        {
            let mut running = self.running.write().await;
            if *running {
                return Ok(()); // Already running
            }
            *running = true;
        }

        let mut port = *self.port.read().await;
        let mut listener: Option<TcpListener> = None;

        for _ in 0..100 {
            match TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await {
                Ok(l) => {
                    listener = Some(l);
                    break;
                }
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::AddrInUse && port != 0 {
                        warn!("Port {} is in use, trying {}", port, port + 1);
                        port += 1;
                    } else {
                        let mut running = self.running.write().await;
                        *running = false;
                        return Err(anyhow!("Failed to bind to port: {}", e));
                    }
                }
            }
        }

        let listener = match listener {
            Some(l) => l,
            None => {
                let mut running = self.running.write().await;
                *running = false;
                return Err(anyhow!("Could not find available port"));
            }
        };

        // Record the actual bound port (relevant for port 0)
        let bound_port = listener.local_addr()?.port();
        {
            let mut port_lock = self.port.write().await;
            *port_lock = bound_port;
        }

        info!("Site server started: http://localhost:{}", bound_port);

        let config = self.config.clone();
        let client = self.client.clone();

        // Spawn server task
        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        error!("Failed to accept connection: {}", e);
                        continue;
                    }
                };

                let io = TokioIo::new(stream);
                let config = config.clone();
                let client = client.clone();

                tokio::spawn(async move {
                    let service = service_fn(|req| {
                        let config = config.clone();
                        let client = client.clone();
                        async move { handle_request(req, config, client).await }
                    });

                    if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                        if !e.to_string().contains("connection closed") {
                            error!("Error serving connection: {}", e);
                        }
                    }
                });
            }
        });

        Ok(())
    }

    /// Get the bound server port
    pub async fn get_port(&self) -> u16 {
        *self.port.read().await
    }
}

/// Handle HTTP request
async fn handle_request(
    req: Request<Incoming>,
    config: Arc<Config>,
    client: Arc<WebhookClient>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return Ok(cors_response(
            Response::builder()
                .status(StatusCode::OK)
                .body(Full::new(Bytes::new()))
                .unwrap(),
        ));
    }

    let response = match (method, path.as_str()) {
        (Method::GET, "/") => serve_page(),
        (Method::POST, "/api/enhance") => handle_enhance(req, config, client).await,
        _ => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "text/plain")
            .body(Full::new(Bytes::from("Not Found")))
            .unwrap(),
    };

    Ok(cors_response(response))
}

/// Add CORS headers (restricted to localhost only)
pub fn cors_response(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        "http://localhost".parse().unwrap(),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        "GET, POST, OPTIONS".parse().unwrap(),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        "Content-Type".parse().unwrap(),
    );
    response
}

/// Serve the single page
pub fn serve_page() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(PAGE_HTML)))
        .unwrap()
}

/// Incoming body of `POST /api/enhance`
#[derive(Deserialize)]
struct EnhanceApiRequest {
    prompt: String,
    mode: String,
}

/// Validate and normalize an incoming enhancement request.
/// Returns the trimmed prompt and parsed mode, or a user-facing message.
pub fn validate_request(
    prompt: &str,
    mode: &str,
    max_prompt_chars: usize,
) -> Result<(String, EnhancementMode), String> {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return Err("Prompt must not be empty".to_string());
    }

    if trimmed.chars().count() > max_prompt_chars {
        return Err(format!(
            "Prompt must be at most {} characters",
            max_prompt_chars
        ));
    }

    let mode = EnhancementMode::parse(mode)
        .ok_or_else(|| format!("Unknown enhancement mode: {}", mode))?;

    Ok((trimmed.to_string(), mode))
}

/// Handle an enhancement request from the page
async fn handle_enhance(
    req: Request<Incoming>,
    config: Arc<Config>,
    client: Arc<WebhookClient>,
) -> Response<Full<Bytes>> {
    let body = match read_body_with_limit(req, MAX_BODY_SIZE).await {
        Ok(b) => b,
        Err(e) => {
            return json_error_response(StatusCode::BAD_REQUEST, &e);
        }
    };

    let api_req: EnhanceApiRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(_) => {
            return json_error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let (prompt, mode) =
        match validate_request(&api_req.prompt, &api_req.mode, config.max_prompt_chars) {
            Ok(v) => v,
            Err(msg) => {
                return json_error_response(StatusCode::BAD_REQUEST, &msg);
            }
        };

    info!("Enhancing prompt ({} chars, mode {})", prompt.chars().count(), mode);

    match client.enhance(&prompt, mode).await {
        Ok(enhancement) => json_response(
            StatusCode::OK,
            &serde_json::to_string(&enhancement)
                .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string()),
        ),
        Err(e) => {
            error!("Enhancement failed: {}", e);
            json_error_response(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

/// Read request body with size limit (streaming enforcement to prevent memory exhaustion)
async fn read_body_with_limit(req: Request<Incoming>, max_size: usize) -> Result<Bytes, String> {
    let limited = Limited::new(req.into_body(), max_size);
    match limited.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            let err_str = e.to_string();
            if err_str.contains("length limit exceeded") {
                Err(format!("Request body too large (max {} bytes)", max_size))
            } else {
                Err("Failed to read body".to_string())
            }
        }
    }
}

/// Create JSON error response with safe serialization
pub fn json_error_response(status: StatusCode, error: &str) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&json!({"error": error}))
        .unwrap_or_else(|_| r#"{"error":"unknown"}"#.to_string());
    json_response(status, &body)
}

/// Create JSON response
pub fn json_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
