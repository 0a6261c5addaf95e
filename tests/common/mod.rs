//! Shared helpers for HTTP-level tests
#![allow(dead_code)]

use axum::Router;
use rulecheck::{create_router, AppState, Config};
use serde_json::Value;
use tokio::net::TcpListener;

/// Serve the router on an ephemeral port and return its base URL
pub async fn spawn_app(config: Config) -> String {
    serve(create_router(AppState::new(config))).await
}

/// Serve an already-built router on an ephemeral port
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// POST a JSON body to `/validate-rule`, returning status and parsed body
pub async fn validate(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/validate-rule", base))
        .json(&body)
        .send()
        .await
        .expect("Request failed");
    let status = response.status().as_u16();
    let body = response.json().await.expect("Response was not JSON");
    (status, body)
}
