// crates/whereto-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats). The zone count is
/// the number of *derived* zones, i.e. after dropping zones that merely
/// repeat their parent city's name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub zones: usize,
}
