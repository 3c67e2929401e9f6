use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Simulated error: {0}")]
    Simulation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Failure metadata attached to 5xx responses so the context middleware can
/// log failures it only observes. The middleware never rewrites the response
/// itself; standard error handling produces the body and status.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub error_type: &'static str,
    pub message: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Simulation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::Simulation(_) => "Simulation",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = ErrorDetails {
            error_type: self.error_type(),
            message: self.to_string(),
        };

        let mut response = (status, Json(json!({ "detail": self.to_string() }))).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(details);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_maps_to_500_with_details() {
        let response = AppError::Simulation("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let details = response.extensions().get::<ErrorDetails>().unwrap();
        assert_eq!(details.error_type, "Simulation");
        assert_eq!(details.message, "Simulated error: boom");
    }

    #[test]
    fn test_bad_request_carries_no_details() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.extensions().get::<ErrorDetails>().is_none());
    }
}
