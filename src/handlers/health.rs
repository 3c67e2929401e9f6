use axum::Json;

use crate::middleware::RequestLog;
use crate::types::HealthResponse;

// Logged at debug so routine probes stay quiet under the default threshold.
#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn health_handler(log: RequestLog) -> Json<HealthResponse> {
    log.debug("Health check performed", &[]);
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "scribr".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::config::logging::LoggingConfig;
    use crate::handlers::{AppState, routes};
    use crate::services::logging::{LoggerFactory, MemorySink};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn run_health(level: &str) -> (StatusCode, Vec<String>) {
        let mut settings = crate::config::settings::Settings::default();
        settings.logging = LoggingConfig {
            level: level.to_string(),
            format: "json".to_string(),
        };
        let sink = Arc::new(MemorySink::new());
        let logging = Arc::new(LoggerFactory::with_sink(&settings.logging, sink.clone()));
        let app = routes(AppState {
            config: Arc::new(settings),
            logging,
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let events = sink.events().into_iter().map(|e| e.event).collect();
        (response.status(), events)
    }

    #[tokio::test]
    async fn test_health_check_responds() {
        let (status, events) = run_health("debug").await;
        assert_eq!(status, StatusCode::OK);
        assert!(events.contains(&"Health check performed".to_string()));
    }

    #[tokio::test]
    async fn test_health_event_dropped_below_threshold() {
        let (status, events) = run_health("info").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!events.contains(&"Health check performed".to_string()));
        // The middleware events are info-level and still present.
        assert!(events.contains(&"Request started".to_string()));
    }
}
