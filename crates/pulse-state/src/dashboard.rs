//! Application-state container for the dashboard.
//!
//! Owns every published value and the dataset cache. One instance per
//! window; tests build isolated instances with [`Dashboard::with_parts`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pulse_core::{Config, Logger, SelectionError};
use pulse_stats::{ProvinceDataset, ProvinceDatasetCache};
use pulse_weather::{WeatherProvider, WeatherSnapshot};
use tokio::sync::watch;

use crate::error::DashboardError;
use crate::observable::{DerivedReceiver, Observable};
use crate::registry;
use crate::selection::SelectionState;
use crate::timeline::TimelineSelection;
use crate::weather::{FetchOutcome, WeatherFetcher};

#[derive(Debug)]
pub struct Dashboard {
    logger: Logger,
    selection: SelectionState,
    timeline: TimelineSelection,
    cache: Mutex<ProvinceDatasetCache>,
    dataset: Observable<Arc<ProvinceDataset>>,
    weather: WeatherFetcher,
}

impl Dashboard {
    /// Build a dashboard from configuration.
    pub fn new(config: &Config) -> Result<Self, DashboardError> {
        let provider = WeatherProvider::with_endpoint(
            &config.weather.endpoint,
            config.weather.timezone.clone(),
            Duration::from_secs(config.weather.timeout_secs),
        )?;

        let cache = match config.dashboard.rng_seed {
            Some(seed) => ProvinceDatasetCache::seeded(seed),
            None => ProvinceDatasetCache::new(),
        };

        let initial_city = &config.dashboard.default_city;
        if registry::find(initial_city).is_none() {
            tracing::warn!(
                "Default city {} is not in the registry; weather will be unavailable",
                initial_city
            );
        }

        Ok(Self::with_parts(
            provider,
            cache,
            Logger::from_config(config),
            initial_city,
        ))
    }

    pub fn with_parts(
        provider: WeatherProvider,
        mut cache: ProvinceDatasetCache,
        logger: Logger,
        initial_city: &str,
    ) -> Self {
        let selection = SelectionState::new(initial_city);
        let dataset = Observable::new(cache.get_or_create(&selection.derived_province()));

        Self {
            logger,
            selection,
            timeline: TimelineSelection::new(),
            cache: Mutex::new(cache),
            dataset,
            weather: WeatherFetcher::new(Arc::new(provider), logger),
        }
    }

    /// Select a city and publish the dataset of its province.
    pub fn select_city(&self, name: &str) {
        self.logger.log(format!("Selecting city {}", name));
        self.selection.select_city(name);

        let province = self.selection.derived_province();
        let dataset = self.cache.lock().get_or_create(&province);
        self.dataset.set(dataset);
    }

    /// Select a city, then fetch its weather.
    pub async fn select_city_and_fetch(&self, name: &str) -> FetchOutcome {
        self.select_city(name);
        self.fetch_weather(name).await
    }

    pub async fn fetch_weather(&self, city: &str) -> FetchOutcome {
        self.weather.fetch_weather(city).await
    }

    pub fn get_or_create(&self, province: &str) -> Arc<ProvinceDataset> {
        self.cache.lock().get_or_create(province)
    }

    /// Regenerate `province`'s bundle; republish it if that province is on screen.
    pub fn force_refresh(&self, province: &str) -> Arc<ProvinceDataset> {
        let dataset = self.cache.lock().force_refresh(province);
        if self.selection.derived_province() == province {
            self.dataset.set(Arc::clone(&dataset));
        }
        dataset
    }

    pub fn refresh_current_province(&self) -> Arc<ProvinceDataset> {
        let province = self.selection.derived_province();
        self.logger.log(format!("Refreshing statistics for {}", province));
        self.force_refresh(&province)
    }

    /// Toggle the highlighted timeline bar.
    ///
    /// Every accepted toggle also regenerates the current province's
    /// statistics. Out-of-range indices are rejected without side effects.
    pub fn toggle_timeline_selection(
        &self,
        index: usize,
    ) -> Result<Option<usize>, DashboardError> {
        let dataset = self.dataset.get();
        if dataset.timeline_bar(index).is_none() {
            let len = dataset.timeline_bars.len();
            return Err(SelectionError::TimelineIndexOutOfRange { index, len }.into());
        }

        let selected = self.timeline.toggle(index);
        self.refresh_current_province();
        Ok(selected)
    }

    pub fn selected_city(&self) -> String {
        self.selection.selected_city()
    }

    pub fn selected_province(&self) -> String {
        self.selection.derived_province()
    }

    pub fn selected_timeline_index(&self) -> Option<usize> {
        self.timeline.selected()
    }

    pub fn dataset(&self) -> Arc<ProvinceDataset> {
        self.dataset.get()
    }

    pub fn weather(&self) -> WeatherSnapshot {
        self.weather.snapshot()
    }

    pub fn cached_provinces(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn subscribe_city(&self) -> watch::Receiver<String> {
        self.selection.subscribe_city()
    }

    pub fn subscribe_province(&self) -> DerivedReceiver<String, String> {
        self.selection.subscribe_province()
    }

    pub fn subscribe_dataset(&self) -> watch::Receiver<Arc<ProvinceDataset>> {
        self.dataset.subscribe()
    }

    pub fn subscribe_weather(&self) -> watch::Receiver<WeatherSnapshot> {
        self.weather.subscribe()
    }

    pub fn subscribe_timeline(&self) -> watch::Receiver<Option<usize>> {
        self.timeline.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard(city: &str) -> Dashboard {
        let provider = WeatherProvider::with_endpoint(
            "http://127.0.0.1:9/v1/forecast",
            "Asia/Tehran",
            Duration::from_secs(1),
        )
        .unwrap();
        Dashboard::with_parts(provider, ProvinceDatasetCache::seeded(11), Logger::default(), city)
    }

    #[test]
    fn starts_with_initial_province_dataset() {
        let dash = dashboard("Shiraz");
        assert_eq!(dash.selected_province(), "Fars");
        assert!(Arc::ptr_eq(&dash.dataset(), &dash.get_or_create("Fars")));
        assert_eq!(dash.cached_provinces(), 1);
    }

    #[test]
    fn select_city_publishes_province_dataset() {
        let dash = dashboard("Tehran");
        let mut rx = dash.subscribe_dataset();

        dash.select_city("Rasht");

        assert!(rx.has_changed().unwrap());
        let published = rx.borrow_and_update().clone();
        assert!(Arc::ptr_eq(&published, &dash.get_or_create("Gilan")));
    }

    #[test]
    fn returning_to_province_reuses_cached_bundle() {
        let dash = dashboard("Tehran");
        let tehran = dash.dataset();

        dash.select_city("Yazd");
        dash.select_city("Tehran");

        assert!(Arc::ptr_eq(&tehran, &dash.dataset()));
        assert_eq!(dash.cached_provinces(), 2);
    }

    #[test]
    fn unknown_city_uses_default_province_dataset() {
        let dash = dashboard("Yazd");
        dash.select_city("Gotham");
        assert_eq!(dash.selected_city(), "Gotham");
        assert_eq!(dash.selected_province(), registry::DEFAULT_PROVINCE);
        assert!(Arc::ptr_eq(&dash.dataset(), &dash.get_or_create("Tehran")));
    }

    #[test]
    fn force_refresh_of_selected_province_republishes() {
        let dash = dashboard("Kerman");
        let before = dash.dataset();
        let rx = dash.subscribe_dataset();

        let fresh = dash.force_refresh("Kerman");

        assert!(rx.has_changed().unwrap());
        assert!(!Arc::ptr_eq(&before, &fresh));
        assert!(Arc::ptr_eq(&dash.dataset(), &fresh));
    }

    #[test]
    fn force_refresh_of_other_province_keeps_active_dataset() {
        let dash = dashboard("Kerman");
        let before = dash.dataset();
        let rx = dash.subscribe_dataset();

        dash.force_refresh("Fars");

        assert!(!rx.has_changed().unwrap());
        assert!(Arc::ptr_eq(&before, &dash.dataset()));
    }

    #[test]
    fn timeline_toggle_regenerates_statistics() {
        let dash = dashboard("Tehran");
        let before = dash.dataset();

        assert_eq!(dash.toggle_timeline_selection(3).unwrap(), Some(3));
        let after_first = dash.dataset();
        assert!(!Arc::ptr_eq(&before, &after_first));

        assert_eq!(dash.toggle_timeline_selection(3).unwrap(), None);
        assert!(!Arc::ptr_eq(&after_first, &dash.dataset()));
        assert_eq!(dash.selected_timeline_index(), None);
    }

    #[test]
    fn timeline_toggle_moves_between_indices() {
        let dash = dashboard("Tehran");
        dash.toggle_timeline_selection(3).unwrap();
        assert_eq!(dash.toggle_timeline_selection(7).unwrap(), Some(7));
        assert_eq!(dash.selected_timeline_index(), Some(7));
    }

    #[test]
    fn out_of_range_toggle_is_rejected() {
        let dash = dashboard("Tehran");
        let before = dash.dataset();

        let err = dash.toggle_timeline_selection(120).unwrap_err();

        assert!(matches!(
            err,
            DashboardError::Selection(SelectionError::TimelineIndexOutOfRange {
                index: 120,
                len: 120
            })
        ));
        assert_eq!(dash.selected_timeline_index(), None);
        assert!(Arc::ptr_eq(&before, &dash.dataset()));
    }

    #[test]
    fn dashboard_from_default_config() {
        let mut config = Config::default();
        config.dashboard.rng_seed = Some(1);
        let dash = Dashboard::new(&config).unwrap();
        assert_eq!(dash.selected_city(), "Tehran");
        assert_eq!(dash.dataset().timeline_bars.len(), 120);
        assert!(dash.weather().loading);
    }
}
