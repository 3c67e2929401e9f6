use axum::response::IntoResponse;
use prometheus::Encoder;

use crate::errors::AppError;

pub async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = vec![];
    encoder
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok((axum::http::StatusCode::OK, buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_metrics_handler() {
        let response = metrics_handler().await.into_response();
        let (parts, _body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::OK);
    }
}
