//! Forward checking: filter the last unassigned variable of each
//! almost-assigned constraint.

use super::types::Propagation;
use crate::csp::{ConstraintId, Csp, VarId};

/// Runs forward checking.
///
/// Examines all constraints touching `new_var`, or every constraint on
/// the pre-search call (which is how unary constraints get enforced
/// before search starts). For each examined constraint with exactly one
/// unassigned scope variable, every current-domain value of that variable
/// is tested against the assigned rest of the scope, and unsupported
/// values are pruned. A domain wipeout aborts immediately; the prunings
/// made so far are returned either way so the caller can undo them.
pub fn propagate(csp: &mut Csp, new_var: Option<VarId>) -> Propagation {
    let examined: Vec<ConstraintId> = match new_var {
        Some(v) => csp.constraints_with(v).to_vec(),
        None => csp.constraint_ids().collect(),
    };

    let mut pruned = Vec::new();
    for ci in examined {
        let con = csp.constraint(ci);
        if con.num_unassigned(csp.vars()) != 1 {
            continue;
        }
        let unassigned = con.unassigned_vars(csp.vars())[0];
        let pos = con
            .scope()
            .iter()
            .position(|&v| v == unassigned)
            .expect("unassigned variable not in scope");

        // Scope-ordered value tuple; the open position is rewritten per
        // candidate value.
        let mut values: Vec<i64> = con
            .scope()
            .iter()
            .map(|&v| {
                if v == unassigned {
                    0
                } else {
                    csp.var(v)
                        .assigned_value()
                        .expect("scope variable unexpectedly unassigned")
                }
            })
            .collect();

        let mut unsupported = Vec::new();
        for value in csp.var(unassigned).cur_domain() {
            values[pos] = value;
            if !con.check(&values) {
                unsupported.push(value);
            }
        }

        for value in unsupported {
            log::trace!(
                "fc: prune {} from {}",
                value,
                csp.var(unassigned).name
            );
            csp.var_mut(unassigned)
                .prune(value)
                .expect("forward checking pruned a value twice");
            pruned.push((unassigned, value));
        }

        if csp.var(unassigned).cur_domain_size() == 0 {
            log::debug!("fc: wipeout on {}", csp.var(unassigned).name);
            return Propagation::dead_end(pruned);
        }
    }

    Propagation {
        consistent: true,
        pruned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::{TableConstraint, Variable};

    fn not_equal(name: &str, a: VarId, b: VarId, n: i64) -> TableConstraint {
        let mut c = TableConstraint::new(name, vec![a, b]);
        for x in 1..=n {
            for y in 1..=n {
                if x != y {
                    c.add_satisfying_tuple(vec![x, y]).unwrap();
                }
            }
        }
        c
    }

    /// 4x4 grid with pairwise not-equal constraints along the first row
    /// and the first column.
    fn grid_first_row_and_col() -> (Csp, Vec<Vec<VarId>>) {
        let n = 4;
        let mut csp = Csp::new("grid");
        let cells: Vec<Vec<VarId>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        csp.add_var(Variable::new(
                            format!("V-{i}{j}"),
                            (1..=n as i64).collect(),
                        ))
                    })
                    .collect()
            })
            .collect();
        for k in 1..n {
            let row = not_equal(&format!("row-0-{k}"), cells[0][0], cells[0][k], n as i64);
            csp.add_constraint(row).unwrap();
            let col = not_equal(&format!("col-0-{k}"), cells[0][0], cells[k][0], n as i64);
            csp.add_constraint(col).unwrap();
        }
        (csp, cells)
    }

    #[test]
    fn test_prunes_assigned_value_from_row_and_column() {
        // Row [1,0,0,0]: assigning the 1 must prune value 1 from every
        // other cell of its row and column, and nothing else.
        let (mut csp, cells) = grid_first_row_and_col();
        csp.var_mut(cells[0][0]).assign(1).unwrap();

        let r = propagate(&mut csp, Some(cells[0][0]));
        assert!(r.consistent);

        let mut expected: Vec<(VarId, i64)> = Vec::new();
        for k in 1..4 {
            expected.push((cells[0][k], 1));
            expected.push((cells[k][0], 1));
        }
        let mut got = r.pruned.clone();
        got.sort();
        expected.sort();
        assert_eq!(got, expected);

        for k in 1..4 {
            assert_eq!(csp.var(cells[0][k]).cur_domain(), vec![2, 3, 4]);
            assert_eq!(csp.var(cells[k][0]).cur_domain(), vec![2, 3, 4]);
        }
        // untouched interior cell
        assert_eq!(csp.var(cells[2][2]).cur_domain_size(), 4);
    }

    #[test]
    fn test_wipeout_reports_prunings() {
        let mut csp = Csp::new("wipe");
        let a = csp.add_var(Variable::new("a", vec![1]));
        let b = csp.add_var(Variable::new("b", vec![1]));
        csp.add_constraint(not_equal("a!=b", a, b, 1)).unwrap();

        csp.var_mut(a).assign(1).unwrap();
        let r = propagate(&mut csp, Some(a));
        assert!(!r.consistent);
        assert_eq!(r.pruned, vec![(b, 1)]);
        assert_eq!(csp.var(b).cur_domain_size(), 0);
    }

    #[test]
    fn test_pre_search_enforces_unary_constraints() {
        let mut csp = Csp::new("unary");
        let a = csp.add_var(Variable::new("a", vec![1, 2, 3]));
        let mut only_two = TableConstraint::new("a=2", vec![a]);
        only_two.add_satisfying_tuple(vec![2]).unwrap();
        csp.add_constraint(only_two).unwrap();

        let r = propagate(&mut csp, None);
        assert!(r.consistent);
        let mut got = r.pruned.clone();
        got.sort();
        assert_eq!(got, vec![(a, 1), (a, 3)]);
        assert_eq!(csp.var(a).cur_domain(), vec![2]);
    }

    #[test]
    fn test_ignores_constraints_with_two_open_vars() {
        let mut csp = Csp::new("open");
        let a = csp.add_var(Variable::new("a", vec![1, 2]));
        let b = csp.add_var(Variable::new("b", vec![1, 2]));
        let c = csp.add_var(Variable::new("c", vec![1, 2]));
        let mut con = TableConstraint::new("abc", vec![a, b, c]);
        con.add_satisfying_tuple(vec![1, 2, 1]).unwrap();
        csp.add_constraint(con).unwrap();

        csp.var_mut(a).assign(1).unwrap();
        // b and c still open: FC must not touch this constraint
        let r = propagate(&mut csp, Some(a));
        assert!(r.consistent);
        assert!(r.pruned.is_empty());
    }

    #[test]
    fn test_no_duplicate_prunings() {
        let (mut csp, cells) = grid_first_row_and_col();
        csp.var_mut(cells[0][0]).assign(3).unwrap();
        let r = propagate(&mut csp, Some(cells[0][0]));
        let mut seen = std::collections::HashSet::new();
        for p in &r.pruned {
            assert!(seen.insert(*p), "duplicate pruning {p:?}");
        }
    }
}
