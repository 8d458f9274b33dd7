use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use chat_relay::{
    config::UpstreamConfig,
    server::{handlers::AppState, router},
    upstream::{HttpUpstream, UpstreamClient},
};
use serde_json::Value;
use std::sync::Arc;

/// Router wired to an arbitrary upstream implementation
pub fn create_test_app(upstream: Arc<dyn UpstreamClient>) -> Router {
    router(AppState { upstream })
}

/// Router wired to a real HTTP upstream pointing at `url`
pub fn create_http_app(url: &str, timeout_secs: u64) -> Router {
    let upstream = HttpUpstream::new(create_upstream_config(url, timeout_secs)).unwrap();
    create_test_app(Arc::new(upstream))
}

pub fn create_upstream_config(url: &str, timeout_secs: u64) -> UpstreamConfig {
    UpstreamConfig {
        url: url.to_string(),
        api_key: "test-api-key".to_string(),
        timeout_secs,
    }
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

upstream:
  url: "https://api.gemini.com/v1/chat/completions"
  api_key: "test-api-key"
  timeout_secs: 10
"#;
