//! HTTP routes
//!
//! Three surfaces: the Telegram webhook, a status endpoint, and the Mini
//! App assets under /map/.

use crate::server::state::AppState;
use crate::telegram::types::Update;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::warn;

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_path = resolve_static_dir(&state.config.server.static_dir);
    let webhook_path = state.config.telegram.webhook_path.clone();

    Router::new()
        .route(&webhook_path, post(webhook_handler))
        .route("/api/status", get(status_handler))
        .nest_service(
            "/map",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// Resolve the Mini App asset directory
///
/// Tries the configured path relative to cwd first, then next to the
/// executable.
fn resolve_static_dir(configured: &str) -> String {
    if std::path::Path::new(configured).exists() {
        return configured.to_string();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join(configured);
            if path.exists() {
                return path.to_string_lossy().to_string();
            }
        }
    }

    configured.to_string()
}

/// Telegram webhook endpoint
///
/// POST /webhook (path configurable)
///
/// Always answers 200: a non-2xx response makes Telegram re-deliver the
/// same update indefinitely, so processing failures are only logged.
async fn webhook_handler(
    State(state): State<Arc<AppState>>,
    Json(update): Json<Update>,
) -> StatusCode {
    let update_id = update.update_id;
    if let Err(e) = state.bot.handle_update(update).await {
        warn!(update_id, error = %e, "Update processing failed");
    }
    StatusCode::OK
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Whether a public webhook URL is configured
    pub webhook_configured: bool,
    /// Mini App URL handed out to Telegram keyboards
    pub map_url: Option<String>,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        webhook_configured: state.config.webhook_url().is_some(),
        map_url: state.config.map_url(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        let mut config = Config::default();
        config.telegram.token = "123:test".to_string();
        config.telegram.domain = "https://surf.example.com".to_string();
        Arc::new(AppState::new(config).unwrap())
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert!(status.webhook_configured);
        assert_eq!(
            status.map_url.as_deref(),
            Some("https://surf.example.com/map/")
        );
    }

    #[tokio::test]
    async fn test_webhook_accepts_empty_update() {
        // An update without a message needs no network and must still 200
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"update_id": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_webhook_tolerates_unknown_fields() {
        let app = create_router(create_test_state());

        let body = r#"{
            "update_id": 2,
            "edited_message": {"message_id": 9},
            "my_chat_member": {"status": "member"}
        }"#;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_webhook_rejects_non_json() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/webhook")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(response.status(), StatusCode::OK);
    }
}
