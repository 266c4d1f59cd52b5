use pulse_core::{AppError, ConfigError, ReqwestErrorExt, SelectionError, WeatherError};
use pulse_weather::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Weather fetch failed: {0}")]
    Weather(#[from] FetchError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Weather(FetchError::Network(err)) => {
                AppError::Network(err.into_network_error())
            }
            DashboardError::Weather(FetchError::Status(status)) if status >= 500 => {
                AppError::Weather(WeatherError::ServiceUnavailable)
            }
            DashboardError::Weather(FetchError::Status(status)) => {
                AppError::Weather(WeatherError::ApiError(format!("status {}", status)))
            }
            DashboardError::Weather(FetchError::MalformedResponse(s)) => {
                AppError::Weather(WeatherError::MalformedResponse(s))
            }
            DashboardError::Weather(FetchError::InvalidEndpoint(err)) => {
                AppError::Config(ConfigError::Invalid(err.to_string()))
            }
            DashboardError::Selection(err) => AppError::Selection(err),
        }
    }
}
