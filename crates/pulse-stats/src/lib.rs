//! Per-province dashboard statistics.
//!
//! There is no statistics backend yet; bundles are synthesized from bounded
//! random ranges and cached per province until explicitly regenerated.

pub mod cache;
pub mod generate;
pub mod types;

pub use cache::ProvinceDatasetCache;
pub use types::*;
