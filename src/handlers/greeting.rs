use axum::Json;
use axum::extract::Path;
use serde_json::json;

use crate::errors::AppError;
use crate::middleware::RequestLog;
use crate::types::MessageResponse;

#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn root_handler(log: RequestLog) -> Json<MessageResponse> {
    log.info("Root endpoint accessed", &[]);
    Json(MessageResponse {
        message: "Welcome to the Scribr structured logging demo".to_string(),
    })
}

#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn hello_handler(
    Path(name): Path<String>,
    log: RequestLog,
) -> Result<Json<MessageResponse>, AppError> {
    if name.is_empty() || name.len() > 64 {
        return Err(AppError::BadRequest(
            "name must be between 1 and 64 characters".to_string(),
        ));
    }

    log.info("Hello endpoint accessed", &[("target_name", json!(name))]);
    Ok(Json(MessageResponse {
        message: format!("Hello, {name}!"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{AppState, routes};
    use crate::services::logging::{LoggerFactory, MemorySink};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> (AppState, Arc<MemorySink>) {
        let settings = crate::config::settings::Settings::default();
        let sink = Arc::new(MemorySink::new());
        let logging = Arc::new(LoggerFactory::with_sink(&settings.logging, sink.clone()));
        (
            AppState {
                config: Arc::new(settings),
                logging,
            },
            sink,
        )
    }

    #[tokio::test]
    async fn test_root_handler() {
        let (state, _sink) = test_state();
        let app = routes(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_hello_handler_greets_by_name() {
        let (state, sink) = test_state();
        let app = routes(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/hello/world")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], json!("Hello, world!"));

        let handler_events: Vec<_> = sink
            .events()
            .into_iter()
            .filter(|e| e.event == "Hello endpoint accessed")
            .collect();
        assert_eq!(handler_events.len(), 1);
        assert_eq!(handler_events[0].field("target_name"), Some(&json!("world")));
    }

    #[tokio::test]
    async fn test_hello_handler_rejects_oversized_name() {
        let (state, _sink) = test_state();
        let app = routes(state);

        let long_name = "x".repeat(65);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/hello/{long_name}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
