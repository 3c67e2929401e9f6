use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::config::identity::IdentityConfig;

// Mock decode rule: the first `user_<X>` fragment embedded in a token
// yields `<X>`.
static BEARER_USER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"user_(\w+?)(?:_|$)").unwrap());

/// Maps request headers to an optional username. First match wins:
/// custom header, then Basic credentials, then the mock Bearer decode.
/// Malformed headers never fail; they fall through to the next scheme,
/// and no match at all means anonymous (`None`, not a sentinel).
///
/// All three schemes are demo stand-ins and must never be mistaken for
/// production authentication.
pub fn extract_username(headers: &HeaderMap, config: &IdentityConfig) -> Option<String> {
    if let Some(user) = headers
        .get(config.user_header.as_str())
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return Some(user.to_string());
    }

    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if let Some(encoded) = auth_header.strip_prefix("Basic ") {
        match decode_basic_username(encoded) {
            Some(user) => return Some(user),
            None => warn!("Invalid Basic auth header format"),
        }
    }

    if let Some(token) = auth_header.strip_prefix("Bearer ") {
        return mock_user_from_token(token);
    }

    None
}

// base64(username:password) -> username. The password is ignored and
// never validated.
fn decode_basic_username(encoded: &str) -> Option<String> {
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, _password) = decoded.split_once(':')?;
    Some(username.to_string())
}

fn mock_user_from_token(token: &str) -> Option<String> {
    BEARER_USER_PATTERN
        .captures(token)
        .map(|captures| captures[1].to_string())
}
