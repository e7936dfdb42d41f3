//! Constraint propagation strategies.
//!
//! Three interchangeable strategies share one contract: given the CSP
//! and the most recently assigned variable (`None` on the pre-search
//! call), prune domain values proven inconsistent and return whether the
//! branch survives together with the exact list of prunings — the undo
//! log the search driver replays on backtrack.
//!
//! - [`Propagator::BacktrackCheck`] — no pruning; only validates fully
//!   assigned constraints.
//! - [`Propagator::ForwardChecking`] — filters the single remaining
//!   open variable of each almost-assigned constraint.
//! - [`Propagator::Gac`] — maintains generalized arc consistency with a
//!   deduplicated FIFO worklist.
//!
//! Propagation failure (a domain wipeout or a violated fully-assigned
//! constraint) is an expected outcome, reported in the result value;
//! nothing here panics on an unsatisfiable branch.

mod bt;
mod fc;
mod gac;
mod types;

pub use types::{Propagation, Propagator, Pruning};

pub use bt::propagate as prop_bt;
pub use fc::propagate as prop_fc;
pub use gac::propagate as prop_gac;
