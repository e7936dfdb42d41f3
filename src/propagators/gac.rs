//! Generalized arc consistency via a set-backed FIFO worklist.

use super::types::Propagation;
use crate::csp::{ConstraintId, Csp, VarId};
use std::collections::{HashSet, VecDeque};

/// Runs GAC propagation to a fixed point.
///
/// The worklist starts with every constraint touching `new_var`, or with
/// all constraints when called pre-search (establishing arc consistency
/// from scratch). Popping a constraint, every current-domain value of
/// every scope variable is tested for support; unsupported values are
/// pruned and every constraint touching the shrunk variable goes back on
/// the queue. Queue membership is deduplicated with a companion set, so
/// a constraint is never queued twice at once.
///
/// Domains only shrink during one invocation, so the loop terminates. On
/// success every remaining value of every variable has support in every
/// constraint; a wipeout aborts immediately with the prunings so far.
pub fn propagate(csp: &mut Csp, new_var: Option<VarId>) -> Propagation {
    let seed: Vec<ConstraintId> = match new_var {
        Some(v) => csp.constraints_with(v).to_vec(),
        None => csp.constraint_ids().collect(),
    };
    let mut queue: VecDeque<ConstraintId> = VecDeque::with_capacity(seed.len());
    let mut queued: HashSet<ConstraintId> = HashSet::with_capacity(seed.len());
    for ci in seed {
        if queued.insert(ci) {
            queue.push_back(ci);
        }
    }

    let mut pruned = Vec::new();
    while let Some(ci) = queue.pop_front() {
        queued.remove(&ci);
        let scope = csp.constraint(ci).scope().to_vec();
        for var in scope {
            for value in csp.var(var).cur_domain() {
                if csp.constraint(ci).has_support(csp.vars(), var, value) {
                    continue;
                }
                log::trace!(
                    "gac: {} leaves {}={} unsupported",
                    csp.constraint(ci).name,
                    csp.var(var).name,
                    value
                );
                csp.var_mut(var)
                    .prune(value)
                    .expect("gac pruned a value twice");
                pruned.push((var, value));
                // Re-check every arc the shrunk domain can affect.
                for &cj in csp.constraints_with(var) {
                    if queued.insert(cj) {
                        queue.push_back(cj);
                    }
                }
            }
            if csp.var(var).cur_domain_size() == 0 {
                log::debug!("gac: wipeout on {}", csp.var(var).name);
                return Propagation::dead_end(pruned);
            }
        }
    }

    Propagation {
        consistent: true,
        pruned,
    }
}
