//! Weather service for Pulse
//!
//! Fetches current conditions from the Open-Meteo API and maps WMO weather
//! codes to display icons.

pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::*;
