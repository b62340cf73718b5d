use crate::core::config::Config;
use crate::core::startup::prepare;
use crate::core::state::AppState;
use crate::testing::fake_backend::FakeBackend;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use http_body_util::BodyExt;
use std::sync::Arc;

/// App state wired to a fresh fake backend, already bootstrapped
pub async fn started_state() -> (Arc<AppState>, Arc<FakeBackend>) {
    let (client, backend) = FakeBackend::start().await;
    let config = Config::from_toml("[server]\nport = 3000\n", None).unwrap();
    let state = AppState::new(config, client);
    prepare(&state).await;
    (Arc::new(state), backend)
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
