// crates/whereto-core/src/model/mod.rs
//! Flat destination model and the search that runs over it.

pub mod convert;
pub mod flat;
pub mod search;

pub use flat::{City, Dataset, Zone};
pub use search::{HitItem, SearchHit, TierWeights, CITY_TIERS, DEFAULT_LIMIT, ZONE_TIERS};
