// crates/whereto-core/src/error.rs

use thiserror::Error;

/// Errors that can occur while building a [`Dataset`](crate::Dataset).
///
/// Searching never fails: once a dataset exists, `search` and `highlight`
/// are total over their inputs and report "nothing useful" with an empty
/// result, not an error. Only construction has failure modes: parsing the
/// reference JSON and validating the record invariants.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The reference JSON could not be parsed into city records.
    #[error("malformed destination data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two city records share a code. Codes are the primary key and the
    /// dedup key for city results, so this is never recoverable.
    #[error("duplicate city code: {0}")]
    DuplicateCode(String),

    /// A city record has an empty or whitespace-only code.
    #[error("city record {0:?} has no code")]
    EmptyCode(String),

    /// A city record has an empty or whitespace-only display name.
    #[error("city record {0} has no display name")]
    EmptyName(String),

    /// More city records than the 16-bit city ids can index.
    #[error("too many cities ({0}) for 16-bit ids")]
    TooManyCities(usize),

    /// More zone entries than the 32-bit zone ranges can index.
    #[error("too many zones ({0}) for 32-bit ranges")]
    TooManyZones(usize),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DatasetError>;
