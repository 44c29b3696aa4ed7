//! Pure upper-bound calculators (§4.2): `rtu`, `RTWU`, `RLU`, `RSU`.
//!
//! Every function here is a pure computation over transaction slices with
//! no shared state — the opposite of the caller-facing
//! [`crate::utility_index::UtilityIndex`], which exists only to cache
//! these results across a recursion frame.

use crate::item::ItemId;
use crate::transaction::Transaction;

/// Positive transaction utility: `rtu(T) = Σ max(utilities[i], 0)`.
pub fn positive_transaction_utility(t: &Transaction) -> f64 {
    t.utilities().iter().filter(|&&u| u > 0.0).sum()
}

/// `RTWU(i)`: sum of `rtu(T)` over every transaction in `containing_item`.
///
/// The caller is responsible for passing exactly the transactions that
/// contain the item in question (e.g. `IX[i]`); this function does not
/// re-filter, matching the "Σ over all T that contain i" reading of §4.2.
pub fn rtwu(containing_item: &[Transaction]) -> f64 {
    containing_item.iter().map(positive_transaction_utility).sum()
}

fn max_position_of(t: &Transaction, prefix: &[ItemId]) -> Option<usize> {
    prefix.iter().filter_map(|&i| t.position_of(i)).max()
}

fn positive_utility_from(t: &Transaction, start: usize) -> f64 {
    t.utilities()
        .iter()
        .skip(start)
        .filter(|&&u| u > 0.0)
        .sum()
}

/// `RLU(i | X)` over `containing_prefix_and_item`, the transactions that
/// contain `prefix ∪ {i}`.
///
/// `u(X, T) + Σ_{j after max(X), utility>0} utilities_T[j]`. When `prefix`
/// is empty there is no "after max(X)" cutoff, so the whole transaction's
/// positive tail counts (`max(X)` degenerates to "before the first item").
pub fn rlu(prefix: &[ItemId], containing_prefix_and_item: &[Transaction]) -> f64 {
    containing_prefix_and_item
        .iter()
        .map(|t| {
            let u_x = t.utility_of_set(prefix);
            let start = match max_position_of(t, prefix) {
                Some(idx) => idx + 1,
                None => 0,
            };
            u_x + positive_utility_from(t, start)
        })
        .sum()
}

/// `RSU(i | X)` over `containing_prefix_and_item`, the transactions that
/// contain `prefix ∪ {i}`.
///
/// `u(X, T) + utilities_T[i] + Σ_{j after i, utility>0} utilities_T[j]`.
pub fn rsu(item: ItemId, prefix: &[ItemId], containing_prefix_and_item: &[Transaction]) -> f64 {
    containing_prefix_and_item
        .iter()
        .map(|t| {
            let u_x = t.utility_of_set(prefix);
            let (idx, u_i) = match (t.position_of(item), t.utility_of(item)) {
                (Some(idx), Some(u)) => (idx, u),
                _ => return u_x,
            };
            u_x + u_i + positive_utility_from(t, idx + 1)
        })
        .sum()
}
