//! Highlighted timeline bar.

use tokio::sync::watch;

use crate::observable::Observable;

#[derive(Debug)]
pub struct TimelineSelection {
    selected: Observable<Option<usize>>,
}

impl Default for TimelineSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineSelection {
    pub fn new() -> Self {
        Self {
            selected: Observable::new(None),
        }
    }

    /// Select `index`, or clear the selection if `index` is already selected.
    /// Returns the new selection.
    pub fn toggle(&self, index: usize) -> Option<usize> {
        let next = match self.selected.get() {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        self.selected.set(next);
        next
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<usize>> {
        self.selected.subscribe()
    }
}
