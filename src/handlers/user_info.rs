use axum::Json;
use serde_json::json;

use crate::middleware::{RequestContext, RequestLog};
use crate::services::ua_parser;
use crate::types::{ProtectedResponse, UserInfoResponse};

// Reachable without authentication; "protected" is a naming convention of
// the demo, the mock identity schemes are advisory only.
#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn protected_handler(log: RequestLog) -> Json<ProtectedResponse> {
    log.info("Protected endpoint accessed", &[]);
    Json(ProtectedResponse {
        message: "This is a protected resource".to_string(),
        status: "authenticated".to_string(),
    })
}

#[axum::debug_handler(state = crate::handlers::AppState)]
pub async fn user_info_handler(
    context: RequestContext,
    log: RequestLog,
) -> Json<UserInfoResponse> {
    let requested_user = context.user.as_deref().unwrap_or("anonymous");
    log.info(
        "User info requested",
        &[("requested_user", json!(requested_user))],
    );

    let client = ua_parser::parse_user_agent(&context.user_agent);
    Json(UserInfoResponse {
        user: context.user,
        request_id: context.request_id,
        path: context.route,
        method: context.method,
        client,
    })
}
