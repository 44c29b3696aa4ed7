//! Error types for the mining pipeline.

use thiserror::Error;

/// Errors that can arise while preparing or mining a transaction database.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// `items` and `utilities` have different lengths, or an item id
    /// appears twice within a single transaction.
    #[error("malformed transaction at row {row}: {reason}")]
    MalformedTransaction { row: usize, reason: String },

    /// `minUtil` is not a finite number (NaN or +/-infinity).
    #[error("invalid threshold: minUtil must be finite, got {0}")]
    InvalidThreshold(f64),

    /// Reserved for a capacity-bounded utility index implementation.
    ///
    /// The index in this crate is backed by a hash map keyed by item id
    /// (see [`crate::utility_index::UtilityIndex`]), so there is no fixed
    /// capacity to overflow and this variant is never constructed today.
    /// It is kept so a future dense-array index could reuse this error
    /// type without a breaking change.
    #[error("item id {0} exceeds the utility index's addressable range")]
    IndexOverflow(u32),
}

/// Result alias used throughout the mining pipeline.
pub type MiningResult<T> = Result<T, MiningError>;
