//! Router

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{get_content, health_check};
use crate::state::AppState;

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall back to index.html so client-side routes resolve
    let static_files = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Content API
        .route("/api/content", get(get_content))

        // Static files (WASM frontend)
        .fallback_service(static_files)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use landing_content::LandingContent;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(
            AppState::new(LandingContent::default()),
            Path::new("/nonexistent-static-dir"),
        )
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["faq_items"], 6);
    }

    #[tokio::test]
    async fn test_content_is_valid_for_the_frontend() {
        let (status, body) = get_json("/api/content").await;
        assert_eq!(status, StatusCode::OK);

        let content: LandingContent = serde_json::from_value(body).unwrap();
        content.validate().unwrap();
        assert_eq!(content, LandingContent::default());
    }

    #[tokio::test]
    async fn test_missing_static_file_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/pkg/missing.wasm")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
