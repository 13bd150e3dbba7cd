#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

use recipe_finder::client::{RecipeClient, RetryPolicy};
use recipe_finder::config::UpstreamConfig;
use recipe_finder::server::{create_router, AppState};

/// Retry policy with near-zero backoff so retry tests run fast.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        backoff_factor: Duration::from_millis(1),
        ..Default::default()
    }
}

pub fn upstream_config(base_url: &str, timeout: Duration) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_string(),
        app_id: "test-id".to_string(),
        app_key: "test-key".to_string(),
        timeout,
    }
}

/// Serve the application against the given upstream, returning its base URL.
pub async fn spawn_app(upstream: UpstreamConfig, retry: RetryPolicy) -> String {
    let client = Arc::new(RecipeClient::new(&upstream, retry));
    let app = create_router(AppState { client });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test app failed");
    });

    format!("http://{}", addr)
}

#[derive(Clone)]
struct ScriptState {
    statuses: Arc<Vec<u16>>,
    body: &'static str,
    hits: Arc<AtomicUsize>,
}

async fn scripted_handler(State(state): State<ScriptState>) -> (StatusCode, String) {
    let n = state.hits.fetch_add(1, Ordering::SeqCst);
    match state.statuses.get(n) {
        Some(code) => (
            StatusCode::from_u16(*code).expect("invalid scripted status"),
            String::new(),
        ),
        None => (StatusCode::OK, state.body.to_string()),
    }
}

/// An upstream stand-in that serves a fixed status sequence, then `body`
/// with 200 for every later request. Returns the search URL and the
/// request counter.
pub async fn spawn_scripted_upstream(
    statuses: Vec<u16>,
    body: &'static str,
) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = ScriptState {
        statuses: Arc::new(statuses),
        body,
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/search", get(scripted_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind scripted upstream");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("scripted upstream failed");
    });

    (format!("http://{}/search", addr), hits)
}

async fn slow_handler() -> (StatusCode, String) {
    tokio::time::sleep(Duration::from_secs(5)).await;
    (StatusCode::OK, r#"{"more": false}"#.to_string())
}

/// An upstream that answers far slower than any test client timeout.
pub async fn spawn_slow_upstream() -> String {
    let app = Router::new().route("/search", get(slow_handler));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind slow upstream");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("slow upstream failed");
    });

    format!("http://{}/search", addr)
}

/// A URL nothing is listening on; connections to it are refused.
pub fn refused_upstream_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("failed to read local addr");
    drop(listener);
    format!("http://{}/search", addr)
}

pub const ONE_HIT_BODY: &str = r#"{
    "more": true,
    "hits": [
        {
            "recipe": {
                "label": "Soup",
                "ingredientLines": ["water"],
                "url": "http://x",
                "image": "http://y"
            }
        }
    ]
}"#;
