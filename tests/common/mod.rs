#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;

use typing_backend::auth::{sign_token, JwtVerifier};
use typing_backend::config::Config;
use typing_backend::db::{MemorySessionStore, SessionDocument, SessionStore};
use typing_backend::state::AppState;

pub const SECRET: &str = "integration-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemorySessionStore>,
}

pub fn create_test_app() -> TestApp {
    let store = Arc::new(MemorySessionStore::new());
    let config = Config {
        token_secret: Some(SECRET.to_string()),
        ..Config::default()
    };
    let state = AppState::new(
        config,
        Arc::new(JwtVerifier::new(Some(SECRET.to_string()))),
        store.clone(),
    );

    TestApp {
        router: typing_backend::create_app(state),
        store,
    }
}

pub fn token_for(user_id: &str) -> String {
    sign_token(user_id, SECRET, chrono::Duration::hours(1)).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Persistence runs in the background; poll until it lands.
pub async fn wait_for_session(
    store: &MemorySessionStore,
    user_id: &str,
) -> Option<SessionDocument> {
    for _ in 0..50 {
        if let Some(doc) = store.get(user_id).await.unwrap() {
            return Some(doc);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}
