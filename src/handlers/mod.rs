pub mod greeting;
pub mod health;
pub mod metrics;
pub mod simulate;
pub mod user_info;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::config::settings::Settings;
use crate::middleware::context::context_middleware;
use crate::services::logging::LoggerFactory;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub logging: Arc<LoggerFactory>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::root_handler))
        .route("/hello/{name}", get(greeting::hello_handler))
        .route("/protected", get(user_info::protected_handler))
        .route("/user-info", get(user_info::user_info_handler))
        .route("/simulate-error", post(simulate::simulate_error_handler))
        .route("/health", get(health::health_handler))
        .route("/metrics", get(metrics::metrics_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            context_middleware,
        ))
        .with_state(state)
}
