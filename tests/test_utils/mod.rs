//! Test utilities for integration tests
use std::sync::Arc;

use axum::Router;
use axum::body::Body;

use chatrelay::api::AppState;
use chatrelay::api::app;
use chatrelay::core::AppConfig;

/// Config pointing at a test upstream. `api_url` is usually a
/// `mockito` server URL.
pub fn test_config(api_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        api_url: api_url.to_string(),
        api_key: api_key.map(|k| k.to_string()),
        model: String::from("test-model"),
        temperature: 0.5,
    }
}

/// Creates a test application router plus a handle to its state so
/// tests can inspect the shared transcript directly.
pub fn test_app(config: AppConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    (app(Arc::clone(&state)), state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
