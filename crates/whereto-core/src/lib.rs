// crates/whereto-core/src/lib.rs

pub mod api; // JSON/FFI views
pub mod common;
pub mod error;
pub mod highlight;
#[cfg(feature = "embedded-data")]
pub mod loader; // Embedded-table cache
pub mod model;
pub mod prelude;
// Shared raw input (used by builders and the embedded loader)
pub mod raw;
pub mod text;

// Re-exports
pub use crate::api::HitView;
pub use crate::common::DbStats;
pub use crate::error::{DatasetError, Result};
pub use crate::highlight::{highlight, Segment, MIN_HIGHLIGHT_QUERY};
pub use crate::model::{City, Dataset, HitItem, SearchHit, Zone, DEFAULT_LIMIT};
pub use crate::raw::CityRecord;
