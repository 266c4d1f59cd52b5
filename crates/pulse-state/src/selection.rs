//! Selected city and its derived province.

use tokio::sync::watch;

use crate::observable::{Derived, DerivedReceiver, Observable};
use crate::registry;

#[derive(Debug)]
pub struct SelectionState {
    city: Observable<String>,
    province: Derived<String, String>,
}

impl SelectionState {
    pub fn new(initial_city: impl Into<String>) -> Self {
        let city = Observable::new(initial_city.into());
        let province = city.derive(|city: &String| registry::province_of(city).to_string());
        Self { city, province }
    }

    /// Select a city. Names outside the registry are accepted as-is; their
    /// province falls back to the default.
    pub fn select_city(&self, name: impl Into<String>) {
        self.city.set(name.into());
    }

    pub fn selected_city(&self) -> String {
        self.city.get()
    }

    pub fn derived_province(&self) -> String {
        self.province.get()
    }

    pub fn subscribe_city(&self) -> watch::Receiver<String> {
        self.city.subscribe()
    }

    pub fn subscribe_province(&self) -> DerivedReceiver<String, String> {
        self.province.subscribe()
    }
}
