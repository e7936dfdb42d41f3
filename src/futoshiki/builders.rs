//! Futoshiki model builders: board → CSP instance.

use super::board::{validate, Cell, Ineq};
use crate::csp::{Csp, TableConstraint, VarId, Variable};

/// Builds a Futoshiki CSP with binary not-equal row/column constraints.
///
/// One variable per cell, named `V-{row}-{col}` with domain `1..=n`
/// (pre-filled cells get a singleton domain and start assigned); one
/// binary table constraint per inequality operator; and one binary
/// not-equal constraint for every pair of cells sharing a row or a
/// column.
///
/// Returns the CSP and the n×n grid of variable handles in board order,
/// so the solved values can be read back cell by cell.
pub fn binary_model(board: &[Vec<Cell>]) -> Result<(Csp, Vec<Vec<VarId>>), String> {
    let (mut csp, grid) = base_model("futoshiki-binary", board)?;
    let n = grid.len() as i64;

    let ne = ne_tuples(n);
    for (i, row) in grid.iter().enumerate() {
        for (k, (a, b)) in pairs(row).into_iter().enumerate() {
            let mut con = TableConstraint::new(format!("C-row-{i}-{k}"), vec![a, b]);
            con.add_satisfying_tuples(ne.iter().cloned())?;
            csp.add_constraint(con)?;
        }
    }
    for j in 0..grid.len() {
        let col: Vec<VarId> = grid.iter().map(|row| row[j]).collect();
        for (k, (a, b)) in pairs(&col).into_iter().enumerate() {
            let mut con = TableConstraint::new(format!("C-col-{j}-{k}"), vec![a, b]);
            con.add_satisfying_tuples(ne.iter().cloned())?;
            csp.add_constraint(con)?;
        }
    }
    Ok((csp, grid))
}

/// Builds a Futoshiki CSP with n-ary all-different row/column
/// constraints.
///
/// Same variables and inequality constraints as
/// [`binary_model`]; rows and columns are each covered by a single
/// all-different constraint whose satisfying tuples are the
/// permutations of `1..=n`.
pub fn alldiff_model(board: &[Vec<Cell>]) -> Result<(Csp, Vec<Vec<VarId>>), String> {
    let (mut csp, grid) = base_model("futoshiki-alldiff", board)?;
    let n = grid.len() as i64;

    let perms = permutations(n);
    for (i, row) in grid.iter().enumerate() {
        let mut con = TableConstraint::new(format!("C-row-{i}"), row.clone());
        con.add_satisfying_tuples(perms.iter().cloned())?;
        csp.add_constraint(con)?;
    }
    for j in 0..grid.len() {
        let col: Vec<VarId> = grid.iter().map(|row| row[j]).collect();
        let mut con = TableConstraint::new(format!("C-col-{j}"), col);
        con.add_satisfying_tuples(perms.iter().cloned())?;
        csp.add_constraint(con)?;
    }
    Ok((csp, grid))
}

/// Variables for every cell plus the inequality constraints — the part
/// both models share.
fn base_model(name: &str, board: &[Vec<Cell>]) -> Result<(Csp, Vec<Vec<VarId>>), String> {
    let n = validate(board)?;
    let mut csp = Csp::new(name);

    let mut grid: Vec<Vec<VarId>> = Vec::with_capacity(n);
    for (i, row) in board.iter().enumerate() {
        let mut vars_in_row = Vec::with_capacity(n);
        for (j, &entry) in row.iter().enumerate().filter(|&(j, _)| j % 2 == 0) {
            let name = format!("V-{i}-{}", j / 2);
            let var = match entry {
                Cell::Open => Variable::new(name, (1..=n as i64).collect()),
                Cell::Fixed(v) => Variable::fixed(name, v),
                Cell::Op(_) | Cell::NoOp => unreachable!("validated board"),
            };
            vars_in_row.push(csp.add_var(var));
        }
        grid.push(vars_in_row);
    }

    for (i, row) in board.iter().enumerate() {
        for (j, &entry) in row.iter().enumerate().filter(|&(j, _)| j % 2 == 1) {
            let Cell::Op(ineq) = entry else { continue };
            let left = grid[i][j / 2];
            let right = grid[i][j / 2 + 1];
            let mut con = TableConstraint::new(format!("C-ineq-{i}-{j}"), vec![left, right]);
            for x in csp.var(left).cur_domain() {
                for y in csp.var(right).cur_domain() {
                    let holds = match ineq {
                        Ineq::LessThan => x < y,
                        Ineq::GreaterThan => x > y,
                    };
                    if holds {
                        con.add_satisfying_tuple(vec![x, y])?;
                    }
                }
            }
            csp.add_constraint(con)?;
        }
    }

    Ok((csp, grid))
}

/// All ordered pairs `(row[i], row[j])`, `i < j`.
fn pairs(vars: &[VarId]) -> Vec<(VarId, VarId)> {
    let mut out = Vec::new();
    for (i, &a) in vars.iter().enumerate() {
        for &b in &vars[i + 1..] {
            out.push((a, b));
        }
    }
    out
}

/// Tuples `(x, y)` with `x != y` over `1..=n`.
fn ne_tuples(n: i64) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    for x in 1..=n {
        for y in 1..=n {
            if x != y {
                out.push(vec![x, y]);
            }
        }
    }
    out
}

/// All permutations of `1..=n`.
fn permutations(n: i64) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    let mut values: Vec<i64> = (1..=n).collect();
    fn recurse(values: &mut Vec<i64>, k: usize, out: &mut Vec<Vec<i64>>) {
        if k == values.len() {
            out.push(values.clone());
            return;
        }
        for i in k..values.len() {
            values.swap(k, i);
            recurse(values, k + 1, out);
            values.swap(k, i);
        }
    }
    recurse(&mut values, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::VarOrdering;
    use crate::propagators::Propagator;
    use crate::search::{bt_search, SearchConfig, SearchStatus};

    const ALL: [Propagator; 3] = [
        Propagator::BacktrackCheck,
        Propagator::ForwardChecking,
        Propagator::Gac,
    ];

    /// 3x3 board with a unique solution:
    /// ```text
    /// . < . < .        1 2 3
    /// . > .   .   =>   3 1 2
    /// .   .   .        2 3 1
    /// ```
    fn unique_3x3() -> Vec<Vec<Cell>> {
        use Cell::*;
        use Ineq::*;
        vec![
            vec![Open, Op(LessThan), Open, Op(LessThan), Open],
            vec![Open, Op(GreaterThan), Open, NoOp, Open],
            vec![Open, NoOp, Open, NoOp, Open],
        ]
    }

    fn assert_latin_with_ops(csp: &Csp, grid: &[Vec<VarId>], board: &[Vec<Cell>]) {
        let n = grid.len();
        for i in 0..n {
            let mut row: Vec<i64> = (0..n)
                .map(|j| csp.var(grid[i][j]).assigned_value().unwrap())
                .collect();
            row.sort();
            assert_eq!(row, (1..=n as i64).collect::<Vec<_>>(), "row {i}");
            let mut col: Vec<i64> = (0..n)
                .map(|j| csp.var(grid[j][i]).assigned_value().unwrap())
                .collect();
            col.sort();
            assert_eq!(col, (1..=n as i64).collect::<Vec<_>>(), "col {i}");
        }
        for (i, row) in board.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                let Cell::Op(ineq) = entry else { continue };
                let left = csp.var(grid[i][j / 2]).assigned_value().unwrap();
                let right = csp.var(grid[i][j / 2 + 1]).assigned_value().unwrap();
                match ineq {
                    Ineq::LessThan => assert!(left < right),
                    Ineq::GreaterThan => assert!(left > right),
                }
            }
        }
    }

    #[test]
    fn test_constraint_counts() {
        let board = unique_3x3();
        let (bin, grid) = binary_model(&board).unwrap();
        // 3 ops + 3 pairs per row * 3 + 3 pairs per col * 3
        assert_eq!(bin.constraint_count(), 3 + 9 + 9);
        assert_eq!(grid.len(), 3);
        assert_eq!(bin.var_count(), 9);

        let (ad, _) = alldiff_model(&board).unwrap();
        // 3 ops + one all-diff per row and per column
        assert_eq!(ad.constraint_count(), 3 + 3 + 3);
    }

    #[test]
    fn test_fixed_cells_are_assigned() {
        use Cell::*;
        let board = vec![
            vec![Fixed(2), NoOp, Open],
            vec![Open, NoOp, Fixed(1)],
        ];
        let (csp, grid) = binary_model(&board).unwrap();
        assert_eq!(csp.var(grid[0][0]).assigned_value(), Some(2));
        assert_eq!(csp.var(grid[0][0]).domain(), &[2]);
        assert!(!csp.var(grid[0][1]).is_assigned());
        assert_eq!(csp.var(grid[1][1]).assigned_value(), Some(1));
    }

    #[test]
    fn test_unique_solution_all_models_all_propagators() {
        let board = unique_3x3();
        let expected = [[1, 2, 3], [3, 1, 2], [2, 3, 1]];
        for build in [binary_model, alldiff_model] {
            for propagator in ALL {
                let (mut csp, grid) = build(&board).unwrap();
                let r = bt_search(
                    &mut csp,
                    propagator,
                    VarOrdering::Mrv,
                    &SearchConfig::default(),
                );
                assert_eq!(r.status, SearchStatus::Satisfied, "{propagator:?}");
                for i in 0..3 {
                    for j in 0..3 {
                        assert_eq!(
                            csp.var(grid[i][j]).assigned_value(),
                            Some(expected[i][j]),
                            "cell ({i},{j}) under {propagator:?}"
                        );
                    }
                }
                assert_latin_with_ops(&csp, &grid, &board);
            }
        }
    }

    #[test]
    fn test_4x4_with_fixed_cells_solves() {
        use Cell::*;
        use Ineq::*;
        // satisfied by 1324 / 2431 / 3142 / 4213, among others
        let board = vec![
            vec![Fixed(1), NoOp, Open, Op(GreaterThan), Open, NoOp, Open],
            vec![Open, NoOp, Open, NoOp, Open, Op(GreaterThan), Open],
            vec![Open, Op(GreaterThan), Open, NoOp, Open, NoOp, Open],
            vec![Open, NoOp, Fixed(2), NoOp, Open, NoOp, Open],
        ];
        for build in [binary_model, alldiff_model] {
            for propagator in ALL {
                let (mut csp, grid) = build(&board).unwrap();
                let r = bt_search(
                    &mut csp,
                    propagator,
                    VarOrdering::Mrv,
                    &SearchConfig::default(),
                );
                assert_eq!(r.status, SearchStatus::Satisfied, "{propagator:?}");
                assert_latin_with_ops(&csp, &grid, &board);
            }
        }
    }

    #[test]
    fn test_contradictory_fixed_cells_unsatisfiable_under_gac() {
        // Both duplicated cells are pre-assigned, so only GAC (which
        // bootstraps over every constraint) can see the violated pair:
        // BT and FC never examine constraints with zero open variables.
        use Cell::*;
        let board = vec![
            vec![Fixed(1), NoOp, Fixed(1), NoOp, Open],
            vec![Open, NoOp, Open, NoOp, Open],
            vec![Open, NoOp, Open, NoOp, Open],
        ];
        for build in [binary_model, alldiff_model] {
            let (mut csp, _) = build(&board).unwrap();
            let r = bt_search(
                &mut csp,
                Propagator::Gac,
                VarOrdering::Mrv,
                &SearchConfig::default(),
            );
            assert_eq!(r.status, SearchStatus::Unsatisfiable);
        }
    }

    #[test]
    fn test_unsatisfiable_operators_all_propagators() {
        // Both rows forced to (1,2) by their operator, so the columns
        // can never be all-different.
        use Cell::*;
        use Ineq::*;
        let board = vec![
            vec![Open, Op(LessThan), Open],
            vec![Open, Op(LessThan), Open],
        ];
        for build in [binary_model, alldiff_model] {
            for propagator in ALL {
                let (mut csp, _) = build(&board).unwrap();
                let r = bt_search(
                    &mut csp,
                    propagator,
                    VarOrdering::Mrv,
                    &SearchConfig::default(),
                );
                assert_eq!(r.status, SearchStatus::Unsatisfiable, "{propagator:?}");
            }
        }
    }

    #[test]
    fn test_models_agree_on_solution_via_result_map() {
        let board = unique_3x3();
        let (mut bin, _) = binary_model(&board).unwrap();
        let (mut ad, _) = alldiff_model(&board).unwrap();
        let cfg = SearchConfig::default();
        let r1 = bt_search(&mut bin, Propagator::Gac, VarOrdering::Mrv, &cfg);
        let r2 = bt_search(&mut ad, Propagator::ForwardChecking, VarOrdering::Mrv, &cfg);
        assert_eq!(r1.solution, r2.solution);
    }

    #[test]
    fn test_permutations_helper() {
        let p = permutations(3);
        assert_eq!(p.len(), 6);
        assert!(p.contains(&vec![1, 2, 3]));
        assert!(p.contains(&vec![3, 2, 1]));
        let unique: std::collections::HashSet<_> = p.iter().cloned().collect();
        assert_eq!(unique.len(), 6);
    }
}
