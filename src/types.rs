use serde::Serialize;

use crate::services::ua_parser::ClientInfo;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub user: Option<String>, // null when the request is anonymous
    pub request_id: String,
    pub path: String,
    pub method: String,
    pub client: ClientInfo,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
