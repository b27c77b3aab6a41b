//! Mock API entry point.

use std::net::TcpListener;

use anyhow::Context;

use mock_api::telemetry::{TelemetryConfig, init_telemetry};
use mock_api::{AppConfig, AppState, serve};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    let state = AppState::new(&config).context("failed to prepare the demo account")?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(
        address = %listener.local_addr()?,
        require_auth = config.require_auth,
        delay_ms = config.delay.as_millis() as u64,
        "Starting fleet mock API"
    );

    serve(state, listener)?.await?;
    Ok(())
}
