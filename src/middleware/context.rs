use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::IntCounter;
use serde_json::{Map, Value, json};

use crate::errors::ErrorDetails;
use crate::handlers::AppState;
use crate::middleware::{RequestContext, RequestLog};
use crate::services::identity;

static REQUESTS_STARTED: Lazy<IntCounter> = Lazy::new(|| {
    prometheus::register_int_counter!(
        "http_requests_started_total",
        "Total number of requests entering the context middleware"
    )
    .unwrap()
});

static REQUESTS_FAILED: Lazy<IntCounter> = Lazy::new(|| {
    prometheus::register_int_counter!(
        "http_requests_failed_total",
        "Total number of requests that finished with a server error"
    )
    .unwrap()
});

/// Binds {user, route, method, request_id, user_agent} to a fresh logger
/// handle, stores it (and the request context) for handler access, and
/// brackets the inner service with `Request started` and
/// `Request completed` / `Request failed` events.
///
/// The middleware only observes: it never mutates bodies, and a failing
/// handler still produces its response through the standard error path.
pub async fn context_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let started_at = Instant::now();

    let user = identity::extract_username(req.headers(), &state.config.identity);
    let request_id = cuid::cuid2();
    let route = req.uri().path().to_string();
    let method = req.method().to_string();
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let mut bound: Vec<(&str, Value)> = vec![
        ("route", route.clone().into()),
        ("method", method.clone().into()),
        ("request_id", request_id.clone().into()),
        ("user_agent", user_agent.clone().into()),
    ];
    if let Some(user) = &user {
        bound.push(("user", user.clone().into()));
    }
    let logger = state.logging.logger("scribr::middleware").bind(&bound);

    let query = query_fields(req.uri().query());

    let context = RequestContext {
        user,
        route,
        method,
        request_id,
        user_agent,
    };
    req.extensions_mut().insert(context);
    req.extensions_mut().insert(RequestLog(logger.clone()));

    REQUESTS_STARTED.inc();
    match query {
        Some(params) => logger.info("Request started", &[("query", params)]),
        None => logger.info("Request started", &[]),
    }

    let response = next.run(req).await;

    let duration_ms = started_at.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();
    if status.is_server_error() {
        REQUESTS_FAILED.inc();
        let (error_type, message) = match response.extensions().get::<ErrorDetails>() {
            Some(details) => (details.error_type, details.message.clone()),
            None => (
                "Internal",
                status.canonical_reason().unwrap_or("server error").to_string(),
            ),
        };
        logger.error(
            "Request failed",
            &[
                ("error", message.into()),
                ("error_type", error_type.into()),
                ("status_code", json!(status.as_u16())),
                ("duration_ms", json!(duration_ms)),
            ],
        );
    } else {
        logger.info(
            "Request completed",
            &[
                ("status_code", json!(status.as_u16())),
                ("duration_ms", json!(duration_ms)),
            ],
        );
    }

    response
}

// Query parameters for the started event; None when the request carries no
// query string.
fn query_fields(query: Option<&str>) -> Option<Value> {
    let query = query?;
    let mut map = Map::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        map.insert(key.into_owned(), Value::String(value.into_owned()));
    }
    Some(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_fields_absent_without_query() {
        assert_eq!(query_fields(None), None);
    }

    #[test]
    fn test_query_fields_parses_pairs() {
        let fields = query_fields(Some("a=1&b=two")).unwrap();
        assert_eq!(fields["a"], json!("1"));
        assert_eq!(fields["b"], json!("two"));
    }
}
