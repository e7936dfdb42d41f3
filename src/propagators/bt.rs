//! Plain backtracking check: validate fully assigned constraints only.

use super::types::Propagation;
use crate::csp::{Csp, VarId};

/// Runs the plain backtracking check.
///
/// Performs no propagation at all. Without `new_var` (the pre-search
/// call) it trivially succeeds. With `new_var`, every constraint touching
/// it whose scope is now fully assigned is evaluated on the assigned
/// values in scope order; the first violated one is a dead end. Domains
/// are never touched, so the pruning list is always empty.
pub fn propagate(csp: &mut Csp, new_var: Option<VarId>) -> Propagation {
    let Some(var) = new_var else {
        return Propagation::ok();
    };

    for &ci in csp.constraints_with(var) {
        let con = csp.constraint(ci);
        if con.num_unassigned(csp.vars()) > 0 {
            continue;
        }
        let values: Vec<i64> = con
            .scope()
            .iter()
            .map(|&v| {
                csp.var(v)
                    .assigned_value()
                    .expect("fully assigned constraint has an unassigned variable")
            })
            .collect();
        if !con.check(&values) {
            log::debug!("{}: violated by {:?}", con.name, values);
            return Propagation::dead_end(Vec::new());
        }
    }
    Propagation::ok()
}
