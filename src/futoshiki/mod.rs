//! Futoshiki grid models.
//!
//! Encodes a Futoshiki board (a latin square with inequality operators
//! between some horizontally adjacent cells) as a CSP, in either of two
//! classic formulations:
//!
//! - [`binary_model`] — binary not-equal constraints for every pair of
//!   cells sharing a row or column;
//! - [`alldiff_model`] — one n-ary all-different constraint per row and
//!   per column.
//!
//! Both return the grid of variable handles alongside the CSP, so the
//! solved board can be read back after
//! [`bt_search`](crate::search::bt_search):
//!
//! ```
//! use fdcsp::futoshiki::{binary_model, Cell, Ineq};
//! use fdcsp::heuristics::VarOrdering;
//! use fdcsp::propagators::Propagator;
//! use fdcsp::search::{bt_search, SearchConfig, SearchStatus};
//!
//! let board = vec![
//!     vec![Cell::Open, Cell::Op(Ineq::LessThan), Cell::Open],
//!     vec![Cell::Fixed(2), Cell::NoOp, Cell::Open],
//! ];
//! let (mut csp, grid) = binary_model(&board).unwrap();
//! let r = bt_search(&mut csp, Propagator::Gac, VarOrdering::Mrv, &SearchConfig::default());
//! assert_eq!(r.status, SearchStatus::Satisfied);
//! assert_eq!(csp.var(grid[0][0]).assigned_value(), Some(1));
//! assert_eq!(csp.var(grid[0][1]).assigned_value(), Some(2));
//! ```

mod board;
mod builders;

pub use board::{Cell, Ineq};
pub use builders::{alldiff_model, binary_model};
