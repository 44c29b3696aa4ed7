//! High-utility itemset mining over transaction databases with mixed-sign
//! (positive and negative) item utilities.
//!
//! An item's utility need not be positive in every transaction it
//! appears in — a loss-leader product, a coupon, a refund line. This
//! crate classifies each item by the sign behavior it exhibits across
//! the whole database (ρ: always positive, δ: mixed, η: always
//! negative), then runs a depth-first, two-procedure enumeration
//! (`Search` over ρ∪δ items, `SearchN` over η items) pruned by
//! transaction-weighted upper bounds, to find every itemset at or above
//! a caller-supplied utility threshold.
//!
//! ```text
//! module            role
//! ---------------   --------------------------------------------------
//! item              ItemId, ItemClass (ρ/δ/η)
//! transaction       Transaction, Database, TransactionRow
//! bounds            rtu, RTWU, RLU, RSU — pure upper-bound calculators
//! utility_index     per-item RTWU/RLU/RSU cache
//! mining_config     MiningConfig — the pure, I/O-free tunables
//! preprocessor      classification, inverted index, Primary/Secondary
//! projection        the projected inverted index used during descent
//! enumerator        Search / SearchN
//! result            HighUtilityItemset
//! miner             Miner — the public entry point
//! ```
//!
//! The CLI-only modules (`config`, `sct`, `sink`) live behind the `cli`
//! feature and are not part of the library's public mining API.

pub mod bounds;
pub mod enumerator;
pub mod error;
pub mod item;
pub mod mining_config;
pub mod miner;
pub mod preprocessor;
pub mod projection;
pub mod result;
pub mod transaction;
pub mod utility_index;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod sct;
#[cfg(feature = "cli")]
pub mod sink;

pub use error::{MiningError, MiningResult};
pub use item::{ItemClass, ItemId};
pub use mining_config::MiningConfig;
pub use miner::Miner;
pub use result::HighUtilityItemset;
pub use transaction::{Database, Transaction, TransactionRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mining_a_tiny_database_end_to_end() {
        let db = Database::from_rows(vec![
            TransactionRow { items: vec![ItemId(1), ItemId(2)], utilities: vec![5.0, 4.0] },
            TransactionRow { items: vec![ItemId(1)], utilities: vec![5.0] },
        ])
        .unwrap();
        let config = MiningConfig::new(5.0);
        let results = Miner::new().run(&db, &config).unwrap();
        assert!(results.iter().any(|r| r.items == vec![ItemId(1)]));
    }
}
