pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::skills::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/skills/extract-text",
            post(handlers::handle_extract_text),
        )
        .route("/api/v1/skills/match", post(handlers::handle_match))
        .route(
            "/api/v1/skills/match-text",
            post(handlers::handle_match_text),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::skills::source::tests::StubSource;

    fn config() -> Config {
        Config {
            gemini_api_key: None,
            gemini_api_url: "http://localhost".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes: 1024,
        }
    }

    async fn health_body(state: AppState) -> serde_json::Value {
        let response = build_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_keyword_scan_without_source() {
        let body = health_body(AppState {
            config: config(),
            skill_source: None,
        })
        .await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["skill_source"], "keyword_scan");
    }

    #[tokio::test]
    async fn test_health_reports_configured_source() {
        let body = health_body(AppState {
            config: config(),
            skill_source: Some(Arc::new(StubSource::returning(&["rust"]))),
        })
        .await;
        assert_eq!(body["skill_source"], "stub");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = build_router(AppState {
            config: config(),
            skill_source: None,
        })
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
