// crates/whereto-core/src/prelude.rs

//! Convenient re-exports: `use whereto_core::prelude::*;`

pub use crate::api::HitView;
pub use crate::common::DbStats;
pub use crate::error::{DatasetError, Result};
pub use crate::highlight::{highlight, Segment, MIN_HIGHLIGHT_QUERY};
pub use crate::model::{City, Dataset, HitItem, SearchHit, Zone, DEFAULT_LIMIT};
pub use crate::raw::CityRecord;
pub use crate::text::NameMatch;
