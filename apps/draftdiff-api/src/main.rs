//! DraftDiff API Server - version comparison for thesis drafts
//!
//! Provides REST endpoints for:
//! - Comparing two submitted draft versions
//! - Health checks

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for the review frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Version comparison
        .route("/api/compare", post(handlers::compare))
        // Intra-line word highlighting
        .route("/api/word-diff", post(handlers::word_diff))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("draftdiff_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing DraftDiff API...");
    let state = Arc::new(AppState::new());

    let app = app(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting DraftDiff API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppState::new()))
    }

    async fn post_compare(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/compare")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_compare_text_versions() {
        let (status, body) = post_compare(json!({
            "previous": { "version_number": 1, "text": "alpha\nbeta\ngamma" },
            "current": { "version_number": 2, "text": "alpha\nbeta two\ngamma" },
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["capability"], "ready");
        assert_eq!(body["stats"]["additions"], 1);
        assert_eq!(body["stats"]["removals"], 1);
        assert_eq!(body["stats"]["unchanged"], 2);
        assert_eq!(body["rows"].as_array().unwrap().len(), 4);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_compare_rejects_stale_version_order() {
        let (status, body) = post_compare(json!({
            "previous": { "version_number": 3, "text": "a" },
            "current": { "version_number": 2, "text": "b" },
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("version"));
    }

    #[tokio::test]
    async fn test_compare_rejects_bad_base64() {
        let (status, _body) = post_compare(json!({
            "previous": { "version_number": 1, "pdf_base64": "%%%not-base64%%%" },
            "current": { "version_number": 2, "text": "b" },
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_word_diff_highlights_insertion() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/word-diff")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "left": "the quick fox", "right": "the quick brown fox" }).to_string(),
            ))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let segments = body["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[2]["type"], "add");
        assert_eq!(segments[2]["text"], "brown ");
    }

    #[tokio::test]
    async fn test_compare_without_content_falls_back() {
        let (status, body) = post_compare(json!({
            "previous": { "version_number": 1, "storage_url": "/files/v1.pdf" },
            "current": { "version_number": 2, "storage_url": "/files/v2.pdf" },
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["capability"], "no_content");
        assert!(body["message"].as_str().unwrap().len() > 0);
        assert_eq!(body["pdf_view"]["previous_pdf_url"], "/files/v1.pdf");
        assert_eq!(body["pdf_view"]["current_pdf_url"], "/files/v2.pdf");
    }
}
