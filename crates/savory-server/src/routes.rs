//! Router

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

/// Health check plus the static frontend
///
/// Paths with no matching file get `index.html` so the client router can
/// handle them.
pub fn router(state: AppState) -> Router {
    let frontend = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    const INDEX: &str = "<!DOCTYPE html><title>Savory</title>";

    fn app(dir: &tempfile::TempDir) -> Router {
        fs::write(dir.path().join("index.html"), INDEX).unwrap();
        fs::write(dir.path().join("main.css"), "body { margin: 0; }").unwrap();

        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir: dir.path().to_path_buf(),
        };
        router(AppState::new(config))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(&dir), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["site"], "Savory");
        assert_eq!(json["menu_items"], 6);
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(&dir), "/main.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(&dir), "/menu").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(&dir), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }
}
