//! Variable-ordering heuristics for the search driver.
//!
//! Each heuristic picks the next unassigned variable to branch on. All
//! of them require at least one unassigned variable; calling one on a
//! fully assigned CSP is a caller bug and panics.

use crate::csp::{Csp, VarId};
use rand::Rng;

/// Minimum remaining values: the unassigned variable with the smallest
/// current domain.
///
/// Ties break toward the first-registered variable, which makes the
/// choice total and reproducible for a fixed model-construction order.
///
/// # Panics
///
/// Panics if every variable is assigned.
pub fn ord_mrv(csp: &Csp) -> VarId {
    csp.unassigned_vars()
        .into_iter()
        .min_by_key(|&v| csp.var(v).cur_domain_size())
        .expect("ord_mrv called with no unassigned variables")
}

/// First unassigned variable, in registration order.
///
/// # Panics
///
/// Panics if every variable is assigned.
pub fn ord_first_unassigned(csp: &Csp) -> VarId {
    csp.unassigned_vars()
        .into_iter()
        .next()
        .expect("ord_first_unassigned called with no unassigned variables")
}

/// A uniformly random unassigned variable.
///
/// # Panics
///
/// Panics if every variable is assigned.
pub fn ord_random<R: Rng>(csp: &Csp, rng: &mut R) -> VarId {
    let open = csp.unassigned_vars();
    assert!(
        !open.is_empty(),
        "ord_random called with no unassigned variables"
    );
    open[rng.random_range(0..open.len())]
}

/// Selects a variable-ordering heuristic for the search driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarOrdering {
    /// Minimum remaining values ([`ord_mrv`]).
    #[default]
    Mrv,
    /// Registration order ([`ord_first_unassigned`]).
    FirstUnassigned,
    /// Uniformly random ([`ord_random`]).
    Random,
}

impl VarOrdering {
    /// Applies the selected heuristic.
    pub fn select<R: Rng>(self, csp: &Csp, rng: &mut R) -> VarId {
        match self {
            VarOrdering::Mrv => ord_mrv(csp),
            VarOrdering::FirstUnassigned => ord_first_unassigned(csp),
            VarOrdering::Random => ord_random(csp, rng),
        }
    }
}
