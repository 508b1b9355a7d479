#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use tech_screen_backend::{
    bot::CompletionPolicy,
    config::{Config, LogFormat},
    routes, AppState,
};
use tower::ServiceExt;

pub const WEBHOOK_SECRET: &str = "whsec_test";

pub fn test_config(database_url: &str) -> Config {
    Config {
        server_address: "127.0.0.1:0".into(),
        database_url: database_url.into(),
        db_max_connections: 5,
        telegram_bot_token: "123456:TEST".into(),
        // Nothing listens here; outbound sends fail fast and are only logged.
        telegram_api_url: "http://127.0.0.1:9".into(),
        telegram_webhook_secret: Some(WEBHOOK_SECRET.into()),
        public_url: None,
        webapp_url: None,
        completion_policy: CompletionPolicy::ConfirmedWrite,
        api_rps: 10_000,
        log_format: LogFormat::Text,
    }
}

/// Router over a pool that never connects; only for requests rejected before
/// any query runs.
pub fn offline_app(config: Config) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    routes::app(AppState::new(config, pool))
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
