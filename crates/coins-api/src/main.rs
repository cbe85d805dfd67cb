//! # coins-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the coins API.
//! Binds to `COINS_HOST:COINS_PORT` (default `127.0.0.1:8000`).

use axum::extract::Request;
use axum::ServiceExt;
use coins_api::state::{AppConfig, AppState, LogFormat};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Log subscriber for `format`. Every line carries its source file and line.
fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(filter)
        .with_writer(writer);
    match format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.finish()),
    }
}

fn init_tracing(format: LogFormat) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(subscriber(format, filter, std::io::stdout))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration comes first so it can pick the log format.
    let config = match AppConfig::from_env() {
        Ok(config) => {
            init_tracing(config.log_format)?;
            config
        }
        Err(e) => {
            init_tracing(LogFormat::default())?;
            tracing::error!("Invalid configuration: {e}");
            return Err(e.into());
        }
    };

    let store = coins_api::bootstrap::build_store(&config).map_err(|e| {
        tracing::error!("Store initialization failed: {e}");
        e
    })?;

    let app = coins_api::service(AppState::new(store));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("coins API listening on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
