//! Item identifiers and the ρ/δ/η sign classification.

use std::fmt;

/// An opaque, externally-assigned item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        ItemId(v)
    }
}

/// Sign-behavior classification of an item across the whole database.
///
/// `Rho` < `Delta` < `Eta` is the type-order component of the canonical
/// item order `≺` (preprocessor step 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemClass {
    /// Observed only with positive utility.
    Rho,
    /// Observed with both positive and negative utility.
    Delta,
    /// Observed only with negative utility.
    Eta,
}

impl ItemClass {
    /// Numeric rank used by the canonical order (1 = ρ, 2 = δ, 3 = η).
    pub fn rank(self) -> u8 {
        match self {
            ItemClass::Rho => 1,
            ItemClass::Delta => 2,
            ItemClass::Eta => 3,
        }
    }
}
