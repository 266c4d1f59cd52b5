//! Open-Meteo current-conditions client.

use crate::types::{Coordinate, CurrentConditions, FetchError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const CURRENT_FIELDS: &str = "temperature_2m,weather_code";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    weather_code: i32,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    endpoint: Url,
    timezone: String,
}

impl WeatherProvider {
    /// Provider against the public Open-Meteo endpoint.
    pub fn new(timezone: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_endpoint(
            OPEN_METEO_URL,
            timezone,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    /// Provider against an explicit endpoint (self-hosted Open-Meteo, test servers).
    pub fn with_endpoint(
        endpoint: &str,
        timezone: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: Url::parse(endpoint)?,
            timezone: timezone.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Fetch current temperature and weather code for a coordinate.
    pub async fn fetch_current(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentConditions, FetchError> {
        tracing::debug!(
            "Fetching current weather for {}, {}",
            coordinate.latitude,
            coordinate.longitude
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(CurrentConditions {
            temperature: parsed.current.temperature_2m,
            weather_code: parsed.current.weather_code,
        })
    }
}
