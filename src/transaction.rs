//! Transaction records and the raw input database.

use crate::error::{MiningError, MiningResult};
use crate::item::ItemId;
use std::collections::HashSet;

/// A single transaction: a distinct-item sequence paired with parallel
/// signed utilities, plus a cached transaction utility.
///
/// Immutable after construction. The preprocessor does not mutate a
/// `Transaction` in place; it produces a fresh, filtered/reordered copy
/// (§3 Lifecycle).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    items: Vec<ItemId>,
    utilities: Vec<f64>,
    tu: f64,
}

impl Transaction {
    /// Build a transaction from parallel `items`/`utilities` slices.
    ///
    /// Validates §3's invariant (equal lengths, no duplicate item) and §7's
    /// `MalformedTransaction` taxonomy. `row` is only used to label the
    /// error with the offending input row.
    pub fn new(items: Vec<ItemId>, utilities: Vec<f64>, row: usize) -> MiningResult<Self> {
        if items.len() != utilities.len() {
            return Err(MiningError::MalformedTransaction {
                row,
                reason: format!(
                    "items has {} entries but utilities has {}",
                    items.len(),
                    utilities.len()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(*item) {
                return Err(MiningError::MalformedTransaction {
                    row,
                    reason: format!("duplicate item id {item}"),
                });
            }
        }

        let tu = utilities.iter().sum();
        Ok(Transaction { items, utilities, tu })
    }

    /// Construct a transaction directly from already-validated parts,
    /// recomputing the cached transaction utility. Used internally by the
    /// preprocessor and projection, which only ever produce well-formed
    /// output from well-formed input.
    pub(crate) fn from_parts(items: Vec<ItemId>, utilities: Vec<f64>) -> Self {
        let tu: f64 = utilities.iter().sum();
        Transaction { items, utilities, tu }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn utilities(&self) -> &[f64] {
        &self.utilities
    }

    /// Cached transaction utility, `tu(T) = Σ utilities[i]`.
    pub fn tu(&self) -> f64 {
        self.tu
    }

    /// Position of `item` within this transaction's item order, if present.
    pub fn position_of(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|&i| i == item)
    }

    /// Utility of `item` within this transaction, if present.
    pub fn utility_of(&self, item: ItemId) -> Option<f64> {
        self.position_of(item).map(|idx| self.utilities[idx])
    }

    /// Whether this transaction contains `item`.
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Whether this transaction contains every item of `itemset`.
    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        itemset.iter().all(|&i| self.contains(i))
    }

    /// Sum of utilities of the items in `itemset` that occur in this
    /// transaction: `u(X, T)`.
    pub fn utility_of_set(&self, itemset: &[ItemId]) -> f64 {
        itemset.iter().filter_map(|&i| self.utility_of(i)).sum()
    }
}

/// One raw `(items, utilities)` row as handed to the core by the external
/// parser collaborator (§1).
#[derive(Debug, Clone)]
pub struct TransactionRow {
    pub items: Vec<ItemId>,
    pub utilities: Vec<f64>,
}

/// The finite sequence of transactions making up the mining input (§6).
#[derive(Debug, Clone, Default)]
pub struct Database {
    transactions: Vec<Transaction>,
}

impl Database {
    /// Validate and wrap a sequence of raw rows (§7: each row may fail
    /// independently with `MalformedTransaction`).
    pub fn from_rows(rows: Vec<TransactionRow>) -> MiningResult<Self> {
        let transactions = rows
            .into_iter()
            .enumerate()
            .map(|(row, r)| Transaction::new(r.items, r.utilities, row))
            .collect::<MiningResult<Vec<_>>>()?;
        Ok(Database { transactions })
    }

    /// Wrap already-validated transactions directly.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Database { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[u32]) -> Vec<ItemId> {
        ids.iter().map(|&i| ItemId(i)).collect()
    }

    #[test]
    fn tu_is_cached_sum() {
        let t = Transaction::new(items(&[1, 2, 3]), vec![5.0, -2.0, 4.0], 0).unwrap();
        assert_eq!(t.tu(), 7.0);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Transaction::new(items(&[1, 2]), vec![1.0], 0).unwrap_err();
        assert!(matches!(err, MiningError::MalformedTransaction { row: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_item() {
        let err = Transaction::new(items(&[1, 1]), vec![2.0, 3.0], 4).unwrap_err();
        assert!(matches!(err, MiningError::MalformedTransaction { row: 4, .. }));
    }

    #[test]
    fn utility_of_set_sums_only_present_items() {
        let t = Transaction::new(items(&[1, 2, 3]), vec![5.0, -2.0, 4.0], 0).unwrap();
        assert_eq!(t.utility_of_set(&[ItemId(1), ItemId(3)]), 9.0);
        assert_eq!(t.utility_of_set(&[ItemId(1), ItemId(99)]), 5.0);
    }

    #[test]
    fn empty_database_from_rows() {
        let db = Database::from_rows(vec![]).unwrap();
        assert!(db.is_empty());
    }
}
