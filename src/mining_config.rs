//! The pure, in-memory configuration the core mining pipeline consumes.
//!
//! Deliberately separate from the CLI-facing [`crate::config::CliConfig`]:
//! library callers construct this directly with no I/O, matching §6's
//! "no environment variables are intrinsic to the core."

/// Tunables named explicitly in §6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    /// The utility threshold; only itemsets at or above this are HUIs.
    pub min_util: f64,
    /// Whether descent into `SearchN` requires `u(β) > minUtil` (`true`,
    /// the default) or relaxes to `u(β) >= minUtil` (`false`).
    pub emit_positive_bound_strict: bool,
    /// Whether the preprocessor sorts each item's transaction list by
    /// ascending transaction utility (`true`, the default) or preserves
    /// input order.
    pub order_transactions_by_tu: bool,
    /// Whether to fork the top-level `Search` pivots across a Rayon
    /// thread pool (§5), one independent subtree per pivot, each with its
    /// own scratch and no shared mutable utility index. Only takes effect
    /// when the crate is built with the `parallel` feature; otherwise
    /// this flag is accepted but ignored, so callers can set it
    /// unconditionally without `cfg`-gating their own code.
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(min_util: f64) -> Self {
        MiningConfig {
            min_util,
            emit_positive_bound_strict: true,
            order_transactions_by_tu: true,
            parallel: false,
        }
    }
}
