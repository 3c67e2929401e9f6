pub mod context;

use std::convert::Infallible;
use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::handlers::AppState;
use crate::services::logging::BoundLogger;

#[derive(Clone, Default)]
pub struct RequestContext {
    pub user: Option<String>,  // From identity extraction; None = anonymous
    pub route: String,
    pub method: String,
    pub request_id: String,    // Fresh per request
    pub user_agent: String,    // Raw User-Agent header, "unknown" if absent
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Request-scoped logger handle, stored in request extensions by the context
/// middleware and handed to handlers as an extractor.
#[derive(Clone)]
pub struct RequestLog(pub BoundLogger);

impl Deref for RequestLog {
    type Target = BoundLogger;

    fn deref(&self) -> &BoundLogger {
        &self.0
    }
}

impl FromRequestParts<AppState> for RequestLog {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(log) = parts.extensions.get::<RequestLog>() {
            return Ok(log.clone());
        }

        // Fallback for routes mounted without the context middleware.
        let logger = state.logging.logger("scribr::handlers").bind(&[
            ("route", parts.uri.path().into()),
            ("method", parts.method.as_str().into()),
        ]);
        Ok(RequestLog(logger))
    }
}
