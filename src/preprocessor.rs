//! §4.3: classification, inverted index construction, pruning/reordering,
//! and Primary/Secondary selection.

use crate::bounds::{rsu, rtwu};
use crate::error::{MiningError, MiningResult};
use crate::item::{ItemClass, ItemId};
use crate::mining_config::MiningConfig;
use crate::transaction::{Database, Transaction};
use crate::utility_index::UtilityIndex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// A transaction as stored post-preprocessing: reference-counted so the
/// same transaction can live under every item's inverted-index bucket
/// without cloning its contents (§4.5 EXPANSION).
pub type TxnRef = Arc<Transaction>;

/// The output of preprocessing: a pruned, canonically-sorted database
/// ready for the enumerator.
#[derive(Debug, Clone)]
pub struct PreparedDatabase {
    transactions: Vec<TxnRef>,
    index: HashMap<ItemId, Vec<TxnRef>>,
    classes: HashMap<ItemId, ItemClass>,
    /// ρ ∪ δ items that survived the RTWU filter, in canonical order `≺`.
    pub sorted_secondary: Vec<ItemId>,
    /// η items, in canonical order `≺` (type order alone, since all η
    /// items share rank 3; ties broken by RTWU then id).
    pub sorted_eta: Vec<ItemId>,
    /// `sorted_secondary` items whose `RSU(i | ∅) ≥ minUtil`, order preserved.
    pub primary: Vec<ItemId>,
    /// Bounds as computed during preprocessing (RTWU for every classified
    /// item, RSU for every `sorted_secondary` item at the empty prefix).
    /// Not read by the enumerator, which keeps its own per-frame bounds
    /// (REDESIGN FLAGS); kept here for inspection and testing.
    pub utility_index: UtilityIndex,
}

impl PreparedDatabase {
    pub fn index(&self) -> &HashMap<ItemId, Vec<TxnRef>> {
        &self.index
    }

    pub fn transactions(&self) -> &[TxnRef] {
        &self.transactions
    }

    pub fn class_of(&self, item: ItemId) -> Option<ItemClass> {
        self.classes.get(&item).copied()
    }
}

/// Orders items by the canonical order `≺` (preprocessor step 5): type
/// rank first (ρ=1 < δ=2 < η=3), then ascending RTWU, then ascending item id.
struct CanonicalOrder<'a> {
    classes: &'a HashMap<ItemId, ItemClass>,
    rtwu: &'a HashMap<ItemId, f64>,
}

impl CanonicalOrder<'_> {
    fn rank_of(&self, item: ItemId) -> u8 {
        self.classes.get(&item).map_or(u8::MAX, ItemClass::rank)
    }

    fn rtwu_of(&self, item: ItemId) -> f64 {
        self.rtwu.get(&item).copied().unwrap_or(0.0)
    }

    fn compare(&self, a: ItemId, b: ItemId) -> Ordering {
        self.rank_of(a)
            .cmp(&self.rank_of(b))
            .then_with(|| self.rtwu_of(a).total_cmp(&self.rtwu_of(b)))
            .then_with(|| a.cmp(&b))
    }
}

/// Runs the §4.3 preprocessing pipeline over a validated [`Database`].
pub fn preprocess(db: &Database, config: &MiningConfig) -> MiningResult<PreparedDatabase> {
    if !config.min_util.is_finite() {
        return Err(MiningError::InvalidThreshold(config.min_util));
    }

    // Step 1: classify.
    let mut has_positive: HashMap<ItemId, bool> = HashMap::new();
    let mut has_negative: HashMap<ItemId, bool> = HashMap::new();
    for t in db.transactions() {
        for (&item, &u) in t.items().iter().zip(t.utilities()) {
            if u > 0.0 {
                has_positive.insert(item, true);
            } else if u < 0.0 {
                has_negative.insert(item, true);
            }
            // u == 0.0: classified as "neither" (§9 Open Question, resolved).
        }
    }

    let mut classes: HashMap<ItemId, ItemClass> = HashMap::new();
    for &item in has_positive.keys().chain(has_negative.keys()) {
        let positive = has_positive.get(&item).copied().unwrap_or(false);
        let negative = has_negative.get(&item).copied().unwrap_or(false);
        let class = match (positive, negative) {
            (true, false) => ItemClass::Rho,
            (true, true) => ItemClass::Delta,
            (false, true) => ItemClass::Eta,
            (false, false) => continue,
        };
        classes.entry(item).or_insert(class);
    }

    tracing::debug!(
        rho = classes.values().filter(|c| **c == ItemClass::Rho).count(),
        delta = classes.values().filter(|c| **c == ItemClass::Delta).count(),
        eta = classes.values().filter(|c| **c == ItemClass::Eta).count(),
        "classified items"
    );

    // Step 2: build the initial inverted index over unwrapped transactions.
    let mut initial_index: HashMap<ItemId, Vec<&Transaction>> = HashMap::new();
    for t in db.transactions() {
        for &item in t.items() {
            initial_index.entry(item).or_default().push(t);
        }
    }

    // Step 3: initial RTWU for every classified item.
    let mut bounds = UtilityIndex::new();
    for (&item, txns) in &initial_index {
        let owned: Vec<Transaction> = txns.iter().map(|&t| t.clone()).collect();
        bounds.set_rtwu(item, rtwu(&owned));
    }

    // Step 4: select Secondary (ρ ∪ δ items passing the RTWU filter).
    let secondary: Vec<ItemId> = classes
        .iter()
        .filter(|(_, class)| matches!(class, ItemClass::Rho | ItemClass::Delta))
        .map(|(&item, _)| item)
        .filter(|&item| bounds.get_rtwu(item) >= config.min_util)
        .collect();

    let eta_items: Vec<ItemId> = classes
        .iter()
        .filter(|(_, class)| matches!(class, ItemClass::Eta))
        .map(|(&item, _)| item)
        .collect();

    // Step 5: canonical order, producing SortedSecondary / SortedEta.
    let rtwu_snapshot: HashMap<ItemId, f64> = classes
        .keys()
        .map(|&item| (item, bounds.get_rtwu(item)))
        .collect();
    let order = CanonicalOrder { classes: &classes, rtwu: &rtwu_snapshot };

    let mut sorted_secondary = secondary.clone();
    sorted_secondary.sort_by(|&a, &b| order.compare(a, b));

    let mut sorted_eta = eta_items;
    sorted_eta.sort_by(|&a, &b| order.compare(a, b));

    tracing::debug!(
        secondary = sorted_secondary.len(),
        eta = sorted_eta.len(),
        "selected secondary/eta items"
    );

    // Step 6: prune and reorder every transaction.
    let keep: std::collections::HashSet<ItemId> =
        sorted_secondary.iter().chain(sorted_eta.iter()).copied().collect();

    let pruned: Vec<TxnRef> = db
        .transactions()
        .iter()
        .map(|t| {
            let mut kept: Vec<(ItemId, f64)> = t
                .items()
                .iter()
                .zip(t.utilities())
                .filter(|(item, _)| keep.contains(item))
                .map(|(&item, &u)| (item, u))
                .collect();
            kept.sort_by(|&(a, _), &(b, _)| order.compare(a, b));
            let (items, utilities): (Vec<ItemId>, Vec<f64>) = kept.into_iter().unzip();
            Arc::new(Transaction::from_parts(items, utilities))
        })
        .collect();

    // Rebuild the inverted index from the pruned transactions, preserving
    // input order, then apply step 7's global ascending-tu sort.
    let mut index: HashMap<ItemId, Vec<TxnRef>> = HashMap::new();
    for t in &pruned {
        for &item in t.items() {
            index.entry(item).or_default().push(Arc::clone(t));
        }
    }
    if config.order_transactions_by_tu {
        for bucket in index.values_mut() {
            bucket.sort_by(|a, b| a.tu().total_cmp(&b.tu()));
        }
    }

    // Step 8: initial RSU for every SortedSecondary item at the empty prefix.
    for &item in &sorted_secondary {
        let owned: Vec<Transaction> = index
            .get(&item)
            .map(|v| v.iter().map(|t| (**t).clone()).collect())
            .unwrap_or_default();
        bounds.set_rsu(item, rsu(item, &[], &owned));
    }

    // Step 9: Primary set, preserving SortedSecondary order.
    let primary: Vec<ItemId> = sorted_secondary
        .iter()
        .copied()
        .filter(|&item| bounds.get_rsu(item) >= config.min_util)
        .collect();

    tracing::debug!(primary = primary.len(), "selected primary items");

    Ok(PreparedDatabase {
        transactions: pruned,
        index,
        classes,
        sorted_secondary,
        sorted_eta,
        primary,
        utility_index: bounds,
    })
}
