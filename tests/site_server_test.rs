//! Tests for the site server
//! Drives the real server over HTTP against a wiremock webhook

use enhancer_web::config::{Config, ConfigOptions};
use enhancer_web::site::server::{cors_response, json_response, serve_page, validate_request};
use enhancer_web::site::SiteServer;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a site server on an ephemeral port, pointed at the given webhook
async fn start_site(webhook_url: &str) -> u16 {
    let config = Config::new(
        Some(webhook_url.to_string()),
        ConfigOptions {
            listen_port: Some(0),
            ..Default::default()
        },
    )
    .unwrap();

    let server = SiteServer::new(config).unwrap();
    server.start().await.unwrap();
    server.get_port().await
}

fn api_url(port: u16) -> String {
    format!("http://127.0.0.1:{}/api/enhance", port)
}

// ============================================================================
// Page serving
// ============================================================================

#[tokio::test]
async fn test_page_served_at_root() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::get(format!("http://127.0.0.1:{}/", port))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("Enhance Your AI Prompts"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::get(format!("http://127.0.0.1:{}/nope", port))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

// ============================================================================
// Enhancement API
// ============================================================================

#[tokio::test]
async fn test_enhance_roundtrip_trims_prompt() {
    let mock_server = MockServer::start().await;

    // The page may send padded input; the server trims before calling out
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({"prompt": "hello", "mode": "basic"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"enhancedPrompt": "better hello"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "  hello  ", "mode": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["enhancedPrompt"], "better hello");
}

#[tokio::test]
async fn test_enhance_rejects_empty_prompt() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "   \n ", "mode": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_enhance_rejects_over_length_prompt() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "a".repeat(2001), "mode": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("2000"));
}

#[tokio::test]
async fn test_enhance_rejects_unknown_mode() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "hello", "mode": "turbo"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("turbo"));
}

#[tokio::test]
async fn test_enhance_rejects_invalid_json_body() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .header("Content-Type", "application/json")
        .body("this is not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_enhance_maps_webhook_failure_to_502() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "hello", "mode": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn test_enhance_maps_empty_webhook_body_to_502() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(api_url(port))
        .json(&json!({"prompt": "hello", "mode": "basic"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("empty response"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let mock_server = MockServer::start().await;
    let port = start_site(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, api_url(port))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

// ============================================================================
// Helper functions
// ============================================================================

#[test]
fn test_json_response_sets_content_type() {
    let response = json_response(StatusCode::OK, "{}");
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("Content-Type").unwrap();
    assert_eq!(content_type, "application/json");
}

#[test]
fn test_cors_response_adds_headers() {
    let response = Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::new()))
        .unwrap();

    let cors_resp = cors_response(response);

    assert!(cors_resp
        .headers()
        .contains_key("Access-Control-Allow-Origin"));
    assert!(cors_resp
        .headers()
        .contains_key("Access-Control-Allow-Methods"));
    assert!(cors_resp
        .headers()
        .contains_key("Access-Control-Allow-Headers"));
}

#[test]
fn test_cors_response_preserves_status() {
    let response = Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::new()))
        .unwrap();

    let cors_resp = cors_response(response);
    assert_eq!(cors_resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_serve_page_is_html() {
    let response = serve_page();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("Content-Type").unwrap();
    assert!(content_type.to_str().unwrap().contains("text/html"));
    assert!(content_type.to_str().unwrap().contains("utf-8"));
}

#[test]
fn test_validate_request_accepts_all_modes() {
    for mode in ["basic", "mid", "high"] {
        assert!(validate_request("hello", mode, 2000).is_ok(), "mode {}", mode);
    }
}

#[test]
fn test_validate_request_reports_limit_in_message() {
    let err = validate_request(&"a".repeat(51), "basic", 50).unwrap_err();
    assert!(err.contains("50"));
}
