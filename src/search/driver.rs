//! Backtracking search over a CSP with pluggable propagation.

use super::config::SearchConfig;
use crate::csp::Csp;
use crate::heuristics::VarOrdering;
use crate::propagators::{Propagator, Pruning};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Terminal state of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A complete consistent assignment was found.
    Satisfied,
    /// The search space was exhausted without a solution.
    Unsatisfiable,
    /// The node budget ran out before a verdict.
    NodeLimitReached,
}

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Terminal state.
    pub status: SearchStatus,
    /// Number of assignments tried.
    pub nodes: usize,
    /// Total number of values pruned across all propagator calls.
    pub prunings: usize,
    /// Wall-clock time in milliseconds.
    pub solve_time_ms: i64,
    /// Variable name → value, when satisfied.
    pub solution: Option<HashMap<String, i64>>,
}

struct Stats {
    nodes: usize,
    prunings: usize,
}

/// Backtracking search.
///
/// Runs the propagator once before any assignment, then branches on the
/// variable the ordering picks, trying its current-domain values in
/// order. Every propagator call's prunings are restored verbatim before
/// the next value is tried; the propagator never restores its own.
///
/// On `Satisfied` the solved assignment is left in the CSP (callers can
/// read it through their `VarId` handles) and also snapshotted into the
/// result by variable name. On any other status the CSP is returned to
/// its pre-search state.
pub fn bt_search(
    csp: &mut Csp,
    propagator: Propagator,
    ordering: VarOrdering,
    config: &SearchConfig,
) -> SearchResult {
    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
    let mut stats = Stats {
        nodes: 0,
        prunings: 0,
    };

    log::debug!(
        "{}: bt_search with {:?}/{:?}, {} vars, {} constraints",
        csp.name,
        propagator,
        ordering,
        csp.var_count(),
        csp.constraint_count()
    );

    let pre = propagator.propagate(csp, None);
    stats.prunings += pre.pruned.len();
    let status = if pre.consistent {
        let status = search(csp, propagator, ordering, config, &mut rng, &mut stats);
        if status != SearchStatus::Satisfied {
            restore(csp, &pre.pruned);
        }
        status
    } else {
        restore(csp, &pre.pruned);
        SearchStatus::Unsatisfiable
    };

    let solution = (status == SearchStatus::Satisfied).then(|| {
        csp.vars()
            .iter()
            .map(|v| {
                (
                    v.name.clone(),
                    v.assigned_value().expect("satisfied search left a variable open"),
                )
            })
            .collect()
    });

    SearchResult {
        status,
        nodes: stats.nodes,
        prunings: stats.prunings,
        solve_time_ms: start.elapsed().as_millis() as i64,
        solution,
    }
}

fn search(
    csp: &mut Csp,
    propagator: Propagator,
    ordering: VarOrdering,
    config: &SearchConfig,
    rng: &mut StdRng,
    stats: &mut Stats,
) -> SearchStatus {
    if csp.fully_assigned() {
        return SearchStatus::Satisfied;
    }

    let var = ordering.select(csp, rng);
    for value in csp.var(var).cur_domain() {
        if config.node_limit > 0 && stats.nodes >= config.node_limit {
            return SearchStatus::NodeLimitReached;
        }
        stats.nodes += 1;
        log::trace!("assign {} = {value}", csp.var(var).name);
        csp.var_mut(var)
            .assign(value)
            .expect("current-domain value rejected by assign");

        let p = propagator.propagate(csp, Some(var));
        stats.prunings += p.pruned.len();
        let sub = if p.consistent {
            search(csp, propagator, ordering, config, rng, stats)
        } else {
            SearchStatus::Unsatisfiable
        };
        if sub == SearchStatus::Satisfied {
            return sub;
        }

        restore(csp, &p.pruned);
        csp.var_mut(var).unassign().expect("assigned above");
        if sub == SearchStatus::NodeLimitReached {
            return sub;
        }
    }
    SearchStatus::Unsatisfiable
}

/// Replays a propagator's undo log.
fn restore(csp: &mut Csp, pruned: &[Pruning]) {
    for &(v, value) in pruned {
        csp.var_mut(v)
            .restore(value)
            .expect("undo log names a value that is not pruned");
    }
}
