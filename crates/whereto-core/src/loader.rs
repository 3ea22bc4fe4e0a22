// crates/whereto-core/src/loader.rs

//! # Shared Dataset
//!
//! Builds the process-wide [`Dataset`] from the destination table compiled
//! into the binary and caches it for the lifetime of the process.

use crate::error::Result;
use crate::model::Dataset;
use once_cell::sync::OnceCell;

static DATASET_CACHE: OnceCell<Dataset> = OnceCell::new();

static EMBEDDED_JSON: &str = include_str!("../data/destinations.json");

impl Dataset {
    /// The process-wide dataset, built on first use.
    ///
    /// Every call returns the same `&'static` reference; concurrent first
    /// calls race safely inside the cell and all observe one winner. If the
    /// embedded table fails to parse or validate, nothing is cached and the
    /// error is reported on every call.
    pub fn shared() -> Result<&'static Dataset> {
        DATASET_CACHE.get_or_try_init(|| Dataset::from_json(EMBEDDED_JSON))
    }
}
