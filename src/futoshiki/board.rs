//! Futoshiki board representation.

/// An inequality operator between two horizontally adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ineq {
    /// Left cell strictly less than right cell.
    LessThan,
    /// Left cell strictly greater than right cell.
    GreaterThan,
}

/// One entry of a Futoshiki board row.
///
/// A board of size n has n rows of `2n - 1` entries: cell entries
/// (`Open` or `Fixed`) at even indices, operator entries (`Op` or
/// `NoOp`) at odd indices. The tag decides the entry's meaning at
/// construction time; nothing downstream inspects value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// An empty cell to be solved.
    Open,
    /// A pre-filled cell.
    Fixed(i64),
    /// An inequality between the neighboring cells.
    Op(Ineq),
    /// No relation between the neighboring cells.
    NoOp,
}

/// Checks shape and content of a board, returning its size.
///
/// Rows must all be `2n - 1` long, cells must sit at even indices with
/// fixed values in `1..=n`, operators at odd indices.
pub(super) fn validate(board: &[Vec<Cell>]) -> Result<usize, String> {
    let n = board.len();
    if n == 0 {
        return Err("empty board".into());
    }
    for (i, row) in board.iter().enumerate() {
        if row.len() != 2 * n - 1 {
            return Err(format!(
                "row {i}: expected {} entries, found {}",
                2 * n - 1,
                row.len()
            ));
        }
        for (j, &entry) in row.iter().enumerate() {
            match (j % 2 == 0, entry) {
                (true, Cell::Open) => {}
                (true, Cell::Fixed(v)) => {
                    if v < 1 || v > n as i64 {
                        return Err(format!("row {i}, entry {j}: fixed value {v} out of 1..={n}"));
                    }
                }
                (true, _) => {
                    return Err(format!("row {i}, entry {j}: expected a cell"));
                }
                (false, Cell::Op(_) | Cell::NoOp) => {}
                (false, _) => {
                    return Err(format!("row {i}, entry {j}: expected an operator slot"));
                }
            }
        }
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_board() {
        let board = vec![
            vec![Cell::Open, Cell::Op(Ineq::LessThan), Cell::Fixed(2)],
            vec![Cell::Fixed(2), Cell::NoOp, Cell::Open],
        ];
        assert_eq!(validate(&board), Ok(2));
    }

    #[test]
    fn test_rejects_wrong_row_length() {
        let board = vec![
            vec![Cell::Open, Cell::NoOp, Cell::Open],
            vec![Cell::Open, Cell::NoOp],
        ];
        assert!(validate(&board).is_err());
    }

    #[test]
    fn test_rejects_operator_in_cell_slot() {
        let board = vec![
            vec![Cell::Op(Ineq::LessThan), Cell::NoOp, Cell::Open],
            vec![Cell::Open, Cell::NoOp, Cell::Open],
        ];
        assert!(validate(&board).is_err());
    }

    #[test]
    fn test_rejects_cell_in_operator_slot() {
        let board = vec![
            vec![Cell::Open, Cell::Fixed(1), Cell::Open],
            vec![Cell::Open, Cell::NoOp, Cell::Open],
        ];
        assert!(validate(&board).is_err());
    }

    #[test]
    fn test_rejects_fixed_value_out_of_range() {
        let board = vec![
            vec![Cell::Fixed(3), Cell::NoOp, Cell::Open],
            vec![Cell::Open, Cell::NoOp, Cell::Open],
        ];
        assert!(validate(&board).is_err());
        let board = vec![
            vec![Cell::Fixed(0), Cell::NoOp, Cell::Open],
            vec![Cell::Open, Cell::NoOp, Cell::Open],
        ];
        assert!(validate(&board).is_err());
    }

    #[test]
    fn test_rejects_empty_board() {
        assert!(validate(&[]).is_err());
    }
}
