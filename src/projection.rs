//! §4.5: the projected inverted index used by `Search`/`SearchN` as they
//! descend past a prefix itemset.

use crate::item::ItemId;
use crate::preprocessor::TxnRef;
use crate::transaction::Transaction;
use std::collections::HashMap;
use std::sync::Arc;

/// The restriction of an inverted index to transactions containing a
/// given prefix itemset `β`.
///
/// Built once per recursion frame from the parent frame's index
/// (`IX[last item of β]`, the smallest candidate set already guaranteed
/// to contain every transaction that could contain `β`), not from the
/// full database — this is what keeps each descent cheap.
#[derive(Debug, Clone, Default)]
pub struct ProjectedIndex {
    index: HashMap<ItemId, Vec<TxnRef>>,
}

impl ProjectedIndex {
    /// Wraps an already-built bucket map directly, with no filtering.
    ///
    /// Used to hand the enumerator the preprocessor's own pruned,
    /// canonically-sorted, tu-ordered index (§4.3) as the top-level
    /// index for the empty prefix, instead of re-deriving it through
    /// [`project`] and losing that ordering.
    pub fn from_map(index: HashMap<ItemId, Vec<TxnRef>>) -> Self {
        ProjectedIndex { index }
    }

    pub fn get(&self, item: ItemId) -> &[TxnRef] {
        self.index.get(&item).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains_key(&self, item: ItemId) -> bool {
        self.index.contains_key(&item)
    }
}

/// Projects `candidate_source` (the pivot item's bucket from the parent
/// frame) onto transactions that contain all of `prefix`, redistributing
/// each surviving transaction across the buckets of every item in it that
/// appears in `candidates`.
///
/// A transaction is visited once per bucket it lands in, never once per
/// `(item, transaction)` pair beyond that — each surviving transaction is
/// tested against `prefix` exactly once (the dedup-safety §4.5 calls for),
/// not once per item already in `prefix`.
pub fn project(candidate_source: &[TxnRef], prefix: &[ItemId], candidates: &[ItemId]) -> ProjectedIndex {
    let mut index: HashMap<ItemId, Vec<TxnRef>> = HashMap::new();
    for t in candidate_source {
        if !t.contains_all(prefix) {
            continue;
        }
        for &item in candidates {
            if t.contains(item) {
                index.entry(item).or_default().push(Arc::clone(t));
            }
        }
    }
    ProjectedIndex { index }
}

/// Sum of `rtu(T)` across the distinct transactions reachable from this
/// projection that contain `prefix ∪ {item}` — used when the caller needs
/// the raw transaction set itself rather than a per-item bucket (e.g. to
/// recompute `RTWU` style sums at a given candidate during enumeration).
pub fn transactions_for(projected: &ProjectedIndex, item: ItemId) -> &[Arc<Transaction>] {
    projected.get(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Transaction;

    fn txn(ids: &[u32], utils: &[f64]) -> TxnRef {
        Arc::new(Transaction::new(ids.iter().map(|&i| ItemId(i)).collect(), utils.to_vec(), 0).unwrap())
    }

    #[test]
    fn projection_keeps_only_transactions_containing_prefix() {
        let t1 = txn(&[1, 2, 3], &[5.0, -2.0, 4.0]);
        let t2 = txn(&[2, 3], &[1.0, 1.0]);
        let source = vec![t1, t2];
        let projected = project(&source, &[ItemId(1)], &[ItemId(2), ItemId(3)]);

        assert_eq!(projected.get(ItemId(2)).len(), 1);
        assert_eq!(projected.get(ItemId(3)).len(), 1);
    }

    #[test]
    fn projection_distributes_one_transaction_to_every_candidate_it_contains() {
        let t1 = txn(&[1, 2, 3], &[5.0, -2.0, 4.0]);
        let source = vec![t1];
        let projected = project(&source, &[ItemId(1)], &[ItemId(2), ItemId(3)]);

        assert_eq!(projected.get(ItemId(2)).len(), 1);
        assert_eq!(projected.get(ItemId(3)).len(), 1);
    }

    #[test]
    fn missing_candidate_yields_empty_bucket() {
        let projected = ProjectedIndex::default();
        assert!(projected.get(ItemId(42)).is_empty());
        assert!(!projected.contains_key(ItemId(42)));
    }
}
