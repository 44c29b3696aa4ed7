//! §4.4: the mutually recursive `Search` / `SearchN` enumeration.
//!
//! Each recursion frame owns its own bound scratch (`HashMap<ItemId, f64>`)
//! rather than mutating a table shared across frames (REDESIGN FLAGS):
//! frames never run concurrently on one thread, so there is nothing to
//! protect, and a private map means a subtree's bounds can never leak
//! into a sibling subtree by accident.

use crate::bounds::{rlu, rsu};
use crate::item::ItemId;
use crate::mining_config::MiningConfig;
use crate::projection::{project, ProjectedIndex};
use crate::result::HighUtilityItemset;
use crate::transaction::Transaction;

/// Runs `Search` from the empty prefix, *and* `SearchN` from the empty
/// prefix over the η items directly, and returns every itemset whose
/// utility reached `config.min_util`.
///
/// `SearchN` is also the recursive continuation `Search` forks into once
/// a ρ∪δ pivot clears the `emit_positive_bound_strict` gate (§4.4), but
/// that is a *second*, additional entry point, not the only one: an
/// η-only itemset — one built entirely from negative-only items, with no
/// ρ∪δ item anywhere in it — has no ρ∪δ prefix to descend from, so it is
/// only ever reachable by calling `SearchN` from the empty prefix at the
/// root, against the same top-level index `Search` itself starts from
/// (which already has a bucket for every η item, since preprocessing
/// keeps `Secondary ∪ η` together). Skipping that root call would make
/// every η-only itemset permanently unreachable, violating §8's
/// completeness invariant.
///
/// When the crate is built with the `parallel` feature and
/// `config.parallel` is set, the top-level pivots of `Search` and the
/// root call into `SearchN` are forked across a Rayon thread pool (§5:
/// "Implementations MAY parallelize by forking independent subtrees
/// (each pivot at the top level of `Search`)"); each forked branch
/// computes into its own `Vec` and the branches are concatenated
/// afterward, so no mutable state is shared across threads. Every level
/// below the top stays single-threaded, matching the spec's "does not
/// mandate" concurrency model.
pub fn enumerate(
    primary: &[ItemId],
    secondary: &[ItemId],
    sorted_eta: &[ItemId],
    index: &ProjectedIndex,
    config: &MiningConfig,
) -> Vec<HighUtilityItemset> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return enumerate_parallel(primary, secondary, sorted_eta, index, config);
    }

    let mut out = Vec::new();
    search(&[], primary, secondary, sorted_eta, index, config, &mut out);
    search_n(&[], sorted_eta, index, config, &mut out);
    out
}

#[cfg(feature = "parallel")]
fn enumerate_parallel(
    primary: &[ItemId],
    secondary: &[ItemId],
    eta: &[ItemId],
    index: &ProjectedIndex,
    config: &MiningConfig,
) -> Vec<HighUtilityItemset> {
    use rayon::prelude::*;

    let (from_search, from_search_n) = rayon::join(
        || {
            secondary
                .par_iter()
                .enumerate()
                .filter(|&(_, item)| primary.contains(item))
                .map(|(pos, &item)| {
                    let mut out = Vec::new();
                    search_pivot(&[], secondary, eta, index, config, pos, item, &mut out);
                    out
                })
                .reduce(Vec::new, |mut acc, branch| {
                    acc.extend(branch);
                    acc
                })
        },
        || {
            let mut out = Vec::new();
            search_n(&[], eta, index, config, &mut out);
            out
        },
    );

    let mut out = from_search;
    out.extend(from_search_n);
    out
}

/// Extends `prefix` by one ρ∪δ item at a time (§4.4's `Primary` traversal),
/// refining `Secondary`/`Primary` by position as it descends, and forks
/// into [`search_n`] whenever the extended prefix's utility clears the
/// `emit_positive_bound_strict` gate.
#[allow(clippy::too_many_arguments)]
fn search(
    prefix: &[ItemId],
    primary: &[ItemId],
    secondary: &[ItemId],
    eta: &[ItemId],
    index: &ProjectedIndex,
    config: &MiningConfig,
    out: &mut Vec<HighUtilityItemset>,
) {
    for (pos, &item) in secondary.iter().enumerate() {
        if !primary.contains(&item) {
            continue;
        }
        search_pivot(prefix, secondary, eta, index, config, pos, item, out);
    }
}

/// The body of one `Search` pivot: extend `prefix` by `item` (found at
/// `pos` in `secondary`), project, emit, fork into `SearchN`, refine, and
/// recurse. Factored out of [`search`] so the top-level loop can also
/// drive it — one pivot per Rayon task — from [`enumerate_parallel`].
#[allow(clippy::too_many_arguments)]
fn search_pivot(
    prefix: &[ItemId],
    secondary: &[ItemId],
    eta: &[ItemId],
    index: &ProjectedIndex,
    config: &MiningConfig,
    pos: usize,
    item: ItemId,
    out: &mut Vec<HighUtilityItemset>,
) {
    let bucket = index.get(item);
    if bucket.is_empty() {
        return;
    }

    let mut new_prefix = Vec::with_capacity(prefix.len() + 1);
    new_prefix.extend_from_slice(prefix);
    new_prefix.push(item);

    let u_new_prefix: f64 = bucket.iter().map(|t| t.utility_of_set(&new_prefix)).sum();

    if u_new_prefix >= config.min_util {
        out.push(HighUtilityItemset::new(new_prefix.clone(), u_new_prefix));
    }

    let rest = &secondary[pos + 1..];
    let (new_secondary, new_primary) = refine(&new_prefix, rest, bucket, config);

    let projected = project(bucket, &new_prefix, &new_secondary);
    search(&new_prefix, &new_primary, &new_secondary, eta, &projected, config, out);

    let clears_gate = if config.emit_positive_bound_strict {
        u_new_prefix > config.min_util
    } else {
        u_new_prefix >= config.min_util
    };
    if clears_gate && !eta.is_empty() {
        let eta_projected = project(bucket, &new_prefix, eta);
        search_n(&new_prefix, eta, &eta_projected, config, out);
    }
}

/// Extends `prefix` by one η item at a time (§4.4's negative-only
/// traversal). Every extension strictly adds a non-positive item, so the
/// `RLU` bound — the best case where every remaining item were positive —
/// is always a sound (if pessimistic-about-pruning) upper bound here too.
fn search_n(
    prefix: &[ItemId],
    eta: &[ItemId],
    index: &ProjectedIndex,
    config: &MiningConfig,
    out: &mut Vec<HighUtilityItemset>,
) {
    for (pos, &item) in eta.iter().enumerate() {
        let bucket = index.get(item);
        if bucket.is_empty() {
            continue;
        }

        let mut new_prefix = Vec::with_capacity(prefix.len() + 1);
        new_prefix.extend_from_slice(prefix);
        new_prefix.push(item);

        let u_new_prefix: f64 = bucket.iter().map(|t| t.utility_of_set(&new_prefix)).sum();

        if u_new_prefix >= config.min_util {
            out.push(HighUtilityItemset::new(new_prefix.clone(), u_new_prefix));
        }

        let rest = &eta[pos + 1..];
        let mut new_eta = Vec::new();
        for &cand in rest {
            let containing: Vec<Transaction> =
                bucket.iter().filter(|t| t.contains(cand)).map(|t| (**t).clone()).collect();
            if containing.is_empty() {
                continue;
            }
            if rlu(&new_prefix, &containing) >= config.min_util {
                new_eta.push(cand);
            }
        }

        let projected = project(bucket, &new_prefix, &new_eta);
        search_n(&new_prefix, &new_eta, &projected, config, out);
    }
}

/// Computes `Secondary'`/`Primary'` for a freshly extended prefix: items
/// of `candidates` (already positioned after the pivot) whose `RLU`
/// clears `minUtil` form `Secondary'`; the subset of those whose `RSU`
/// also clears `minUtil` forms `Primary'`.
fn refine(
    new_prefix: &[ItemId],
    candidates: &[ItemId],
    bucket: &[std::sync::Arc<Transaction>],
    config: &MiningConfig,
) -> (Vec<ItemId>, Vec<ItemId>) {
    let mut new_secondary = Vec::new();
    for &cand in candidates {
        let containing: Vec<Transaction> =
            bucket.iter().filter(|t| t.contains(cand)).map(|t| (**t).clone()).collect();
        if containing.is_empty() {
            continue;
        }
        if rlu(new_prefix, &containing) >= config.min_util {
            new_secondary.push(cand);
        }
    }

    let mut new_primary = Vec::new();
    for &cand in &new_secondary {
        let containing: Vec<Transaction> =
            bucket.iter().filter(|t| t.contains(cand)).map(|t| (**t).clone()).collect();
        if rsu(cand, new_prefix, &containing) >= config.min_util {
            new_primary.push(cand);
        }
    }

    (new_secondary, new_primary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining_config::MiningConfig;
    use crate::preprocessor::preprocess;
    use crate::transaction::{Database, TransactionRow};

    fn row(ids: &[u32], utils: &[f64]) -> TransactionRow {
        TransactionRow {
            items: ids.iter().map(|&i| ItemId(i)).collect(),
            utilities: utils.to_vec(),
        }
    }

    fn mine(db: &Database, config: &MiningConfig) -> Vec<HighUtilityItemset> {
        let prepared = preprocess(db, config).unwrap();
        let index = crate::projection::ProjectedIndex::from_map(prepared.index().clone());
        enumerate(&prepared.primary, &prepared.sorted_secondary, &prepared.sorted_eta, &index, config)
    }

    #[test]
    fn singleton_itemsets_at_threshold_are_emitted() {
        let db = Database::from_rows(vec![row(&[1, 2], &[5.0, 4.0])]).unwrap();
        let config = MiningConfig::new(5.0);
        let results = mine(&db, &config);
        assert!(results.iter().any(|r| r.items == vec![ItemId(1)] && r.utility == 5.0));
    }

    #[test]
    fn below_threshold_itemsets_are_not_emitted() {
        let db = Database::from_rows(vec![row(&[1, 2], &[1.0, 1.0])]).unwrap();
        let config = MiningConfig::new(10.0);
        let results = mine(&db, &config);
        assert!(results.is_empty());
    }

    #[test]
    fn two_item_combination_reaches_higher_utility_than_either_alone() {
        let db = Database::from_rows(vec![
            row(&[1, 2], &[3.0, 4.0]),
            row(&[1, 2], &[3.0, 4.0]),
        ])
        .unwrap();
        let config = MiningConfig::new(7.0);
        let results = mine(&db, &config);
        assert!(results.iter().any(|r| r.items == vec![ItemId(1), ItemId(2)] && r.utility == 7.0));
    }

    #[test]
    fn empty_database_yields_no_itemsets() {
        let db = Database::from_rows(vec![]).unwrap();
        let config = MiningConfig::new(0.0);
        let results = mine(&db, &config);
        assert!(results.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_top_level_fork_finds_the_same_itemsets_as_sequential() {
        let db = Database::from_rows(vec![
            row(&[1, 2, 3], &[6.0, -2.0, 4.0]),
            row(&[1, 3], &[3.0, 6.0]),
            row(&[2, 3, 4], &[5.0, 2.0, -7.0]),
        ])
        .unwrap();

        let mut sequential_config = MiningConfig::new(5.0);
        sequential_config.parallel = false;
        let mut sequential = mine(&db, &sequential_config);
        sequential.sort_by(|a, b| a.items.cmp(&b.items));

        let mut parallel_config = sequential_config;
        parallel_config.parallel = true;
        let mut parallel = mine(&db, &parallel_config);
        parallel.sort_by(|a, b| a.items.cmp(&b.items));

        assert_eq!(sequential, parallel);
    }
}
