//! Shared types for the propagation strategies.

use crate::csp::{Csp, VarId};

/// One pruning: this value was removed from this variable's current
/// domain.
pub type Pruning = (VarId, i64);

/// Outcome of one propagator invocation.
///
/// `pruned` lists every value the call removed, in removal order, and is
/// returned on failure as well as success: the caller needs it either
/// way, because it is the authoritative undo log for backtracking.
#[derive(Debug, Clone)]
pub struct Propagation {
    /// `false` when the propagator proved the current partial assignment
    /// a dead end (domain wipeout, or a violated fully-assigned
    /// constraint). An expected outcome, not an error.
    pub consistent: bool,
    /// Every `(variable, value)` pruned during this call.
    pub pruned: Vec<Pruning>,
}

impl Propagation {
    /// A successful propagation that pruned nothing.
    pub fn ok() -> Self {
        Self {
            consistent: true,
            pruned: Vec::new(),
        }
    }

    /// A dead-end result carrying the prunings made before detection.
    pub fn dead_end(pruned: Vec<Pruning>) -> Self {
        Self {
            consistent: false,
            pruned,
        }
    }
}

/// The interchangeable propagation strategies.
///
/// Every strategy shares one contract: called with the CSP and the just
/// assigned variable (or `None` before any assignment has been made), it
/// prunes values it proves inconsistent and reports exactly what it
/// pruned. The caller restores those prunings when it backtracks; a
/// propagator never restores its own prunings within a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Propagator {
    /// No propagation: only verify fully assigned constraints.
    BacktrackCheck,
    /// Forward checking: filter the last unassigned variable of each
    /// almost-assigned constraint.
    ForwardChecking,
    /// Generalized arc consistency: worklist fixed point over all arcs.
    Gac,
}

impl Propagator {
    /// Runs this strategy.
    ///
    /// `new_var` is the most recently assigned variable; `None` means the
    /// pre-search call, before any assignment.
    pub fn propagate(self, csp: &mut Csp, new_var: Option<VarId>) -> Propagation {
        match self {
            Propagator::BacktrackCheck => super::bt::propagate(csp, new_var),
            Propagator::ForwardChecking => super::fc::propagate(csp, new_var),
            Propagator::Gac => super::gac::propagate(csp, new_var),
        }
    }
}
