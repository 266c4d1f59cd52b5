//! Reactive state for the Pulse dashboard.
//!
//! Selected city → derived province → cached province dataset, plus the
//! weather snapshot for the selected city and the highlighted timeline bar.

pub mod dashboard;
pub mod error;
pub mod observable;
pub mod registry;
pub mod selection;
pub mod timeline;
pub mod weather;

pub use dashboard::Dashboard;
pub use error::DashboardError;
pub use observable::{Derived, DerivedReceiver, Observable};
pub use selection::SelectionState;
pub use timeline::TimelineSelection;
pub use weather::{FetchOutcome, WeatherFetcher};

pub use pulse_stats::ProvinceDataset;
pub use pulse_weather::WeatherSnapshot;
