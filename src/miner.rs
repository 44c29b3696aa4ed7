//! §4.6: the public entry point that ties preprocessing and enumeration
//! together.

use crate::enumerator::enumerate;
use crate::error::MiningResult;
use crate::mining_config::MiningConfig;
use crate::preprocessor::preprocess;
use crate::projection::ProjectedIndex;
use crate::result::HighUtilityItemset;
use crate::transaction::Database;

/// Mines a [`Database`] for every itemset whose utility reaches
/// `config.min_util`.
///
/// Owns no state between calls; each invocation preprocesses `db` fresh.
/// Callers that need to mine the same database at several thresholds
/// should call this once per threshold rather than trying to reuse
/// intermediate state — preprocessing (§4.3) depends on `min_util`
/// through the Secondary/Primary filters, so there is no threshold-
/// independent "prepared" artifact worth caching here.
#[derive(Debug, Default, Clone, Copy)]
pub struct Miner;

impl Miner {
    pub fn new() -> Self {
        Miner
    }

    /// Runs the full §4 pipeline and returns every emitted itemset.
    ///
    /// Order of the returned `Vec` follows emission order (§4.4's
    /// depth-first traversal), not itemset size or utility; callers that
    /// need a specific order should sort the result themselves.
    pub fn run(&self, db: &Database, config: &MiningConfig) -> MiningResult<Vec<HighUtilityItemset>> {
        let prepared = preprocess(db, config)?;
        let top_index = ProjectedIndex::from_map(prepared.index().clone());
        Ok(enumerate(
            &prepared.primary,
            &prepared.sorted_secondary,
            &prepared.sorted_eta,
            &top_index,
            config,
        ))
    }
}
