pub mod config;
pub mod error;
pub mod logger;

pub use config::{Config, DashboardConfig, LoggingConfig, ValidationResult, WeatherConfig};
pub use error::{
    AppError, ConfigError, NetworkError, ReqwestErrorExt, SelectionError, WeatherError,
};
pub use logger::Logger;

use anyhow::Result;

/// Initialize tracing for the dashboard.
///
/// `RUST_LOG` takes precedence; otherwise debug mode lowers the filter to `debug`.
pub fn init(config: &Config) -> Result<()> {
    let default_filter = if config.logging.debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!("Pulse core initialized");
    Ok(())
}
