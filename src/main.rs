use std::sync::Arc;

use scribr::config::settings;
use scribr::handlers::{self, AppState};
use scribr::services::logging::LoggerFactory;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_max_level(operational_level(&settings.logging.level))
        .init();

    let logging = Arc::new(LoggerFactory::new(&settings.logging));
    let main_log = logging.logger("scribr::main");
    main_log.info(
        "Application starting up",
        &[("version", json!(env!("CARGO_PKG_VERSION")))],
    );

    let addr = format!("{}:{}", settings.host, settings.app_port);
    let state = AppState {
        config: Arc::new(settings),
        logging,
    };
    let app = handlers::routes(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    main_log.info("Application shutting down", &[]);
    Ok(())
}

// The operational tracing layer follows the same threshold as the domain
// logger so both quiet down together.
fn operational_level(level: &str) -> tracing::Level {
    match level {
        "debug" => tracing::Level::DEBUG,
        "warning" | "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
