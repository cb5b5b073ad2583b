mod config;
mod routes;

use std::net::SocketAddr;
use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "socialscheduler failed to start");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    let addr = SocketAddr::from(([0, 0, 0, 0], host.port));
    leptos_options.site_addr = addr;

    let app = routes::app(leptos_options, host.api_config());
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(port = host.port, api_base_url = %host.api_base_url, "socialscheduler listening");
    axum::serve(listener, app).await?;
    Ok(())
}
