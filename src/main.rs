mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env file is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(port = config.port, "taskflow listening");
    axum::serve(listener, app).await?;
    Ok(())
}
