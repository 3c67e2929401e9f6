use serde_json::json;

use crate::errors::AppError;
use crate::middleware::RequestLog;

/// Always fails so the middleware's failure path can be observed end to end.
#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn simulate_error_handler(log: RequestLog) -> Result<(), AppError> {
    log.warn("Error simulation requested", &[]);
    log.info("Processing simulation", &[]);

    let err = AppError::Simulation("This is a simulated error for testing logging".to_string());
    log.error("Simulated error occurred", &[("error_details", json!(err.to_string()))]);
    Err(err)
}
