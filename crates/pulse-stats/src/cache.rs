//! In-memory dataset cache keyed by province name.

use std::collections::HashMap;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generate;
use crate::types::ProvinceDataset;

/// Lazily generated bundles, one per province.
///
/// Entries are shared as `Arc`s and never mutated in place: a refresh swaps
/// in a new `Arc` and drops the cache's handle to the old one.
#[derive(Debug)]
pub struct ProvinceDatasetCache {
    entries: HashMap<String, Arc<ProvinceDataset>>,
    rng: ChaCha8Rng,
}

impl Default for ProvinceDatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvinceDatasetCache {
    /// Cache seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Cache with reproducible generation.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            entries: HashMap::new(),
            rng,
        }
    }

    /// Cached bundle for `province`, generating and storing one on first access.
    pub fn get_or_create(&mut self, province: &str) -> Arc<ProvinceDataset> {
        if let Some(existing) = self.entries.get(province) {
            return Arc::clone(existing);
        }

        tracing::debug!("Generating dataset for province {}", province);
        let dataset = Arc::new(generate::province_dataset(&mut self.rng));
        self.entries.insert(province.to_string(), Arc::clone(&dataset));
        dataset
    }

    /// Regenerate the bundle for `province`, replacing any cached one.
    pub fn force_refresh(&mut self, province: &str) -> Arc<ProvinceDataset> {
        tracing::debug!("Regenerating dataset for province {}", province);
        let dataset = Arc::new(generate::province_dataset(&mut self.rng));
        self.entries.insert(province.to_string(), Arc::clone(&dataset));
        dataset
    }

    pub fn get(&self, province: &str) -> Option<Arc<ProvinceDataset>> {
        self.entries.get(province).cloned()
    }

    pub fn contains(&self, province: &str) -> bool {
        self.entries.contains_key(province)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
