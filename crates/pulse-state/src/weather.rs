//! Weather fetching for the selected city.
//!
//! Failures never surface as errors: they are logged and the spinner is
//! cleared, leaving the last good temperature and icon on screen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use pulse_core::{AppError, Logger};
use pulse_weather::{WeatherProvider, WeatherSnapshot};
use tokio::sync::watch;

use crate::error::DashboardError;
use crate::observable::Observable;
use crate::registry;

/// How a fetch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New conditions were published
    Updated,
    /// The request failed; loading was cleared and the previous values kept
    Failed { user_message: &'static str },
    /// The city is not in the registry; nothing was published
    UnknownCity,
    /// A newer fetch started before this one completed; its result was dropped
    Superseded,
}

#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Arc<WeatherProvider>,
    snapshot: Observable<WeatherSnapshot>,
    generation: AtomicU64,
    logger: Logger,
}

impl WeatherFetcher {
    pub fn new(provider: Arc<WeatherProvider>, logger: Logger) -> Self {
        Self {
            provider,
            snapshot: Observable::new(WeatherSnapshot::default()),
            generation: AtomicU64::new(0),
            logger,
        }
    }

    pub fn snapshot(&self) -> WeatherSnapshot {
        self.snapshot.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<WeatherSnapshot> {
        self.snapshot.subscribe()
    }

    /// Fetch current conditions for `city` and publish them.
    pub async fn fetch_weather(&self, city: &str) -> FetchOutcome {
        let Some(coordinate) = registry::lookup_coordinates(city) else {
            self.logger.log(format!("No coordinates for {}, skipping weather", city));
            return FetchOutcome::UnknownCity;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.snapshot.update(|s| s.loading = true);

        let result = self.provider.fetch_current(coordinate).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            self.logger.log(format!("Discarding stale weather response for {}", city));
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(conditions) => {
                let snapshot = WeatherSnapshot::from_conditions(&conditions);
                self.logger.info(format!(
                    "Weather for {}: {:?}°C, {}",
                    city,
                    snapshot.temperature,
                    snapshot.icon.as_str()
                ));
                self.snapshot.set(snapshot);
                FetchOutcome::Updated
            }
            Err(e) => {
                let err = DashboardError::from(e);
                self.logger
                    .error(format!("Failed to fetch weather for {}: {}", city, err));
                self.snapshot.update(|s| s.loading = false);
                FetchOutcome::Failed {
                    user_message: AppError::from(err).user_message(),
                }
            }
        }
    }
}
