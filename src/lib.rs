//! Finite-domain constraint-satisfaction solving core.
//!
//! Variables with discrete domains, constraints expressed as explicit
//! sets of satisfying value tuples, and a backtracking search driven by
//! pluggable constraint-propagation strategies:
//!
//! - **Backtrack check** ([`propagators::Propagator::BacktrackCheck`]):
//!   no propagation, only validation of fully assigned constraints.
//! - **Forward checking** ([`propagators::Propagator::ForwardChecking`]):
//!   prunes the last open variable of each almost-assigned constraint.
//! - **Generalized arc consistency** ([`propagators::Propagator::Gac`]):
//!   worklist fixed point; every surviving value keeps a support in
//!   every constraint.
//!
//! Every propagator reports the exact list of values it pruned, and the
//! search driver restores that list verbatim when a branch unwinds —
//! domain state is owned by the [`csp::Csp`] alone and every mutation is
//! logged, never hidden.
//!
//! # Architecture
//!
//! - [`csp`] — the model layer: variables, table constraints, the
//!   problem instance.
//! - [`propagators`] — the three interchangeable propagation strategies.
//! - [`heuristics`] — variable-ordering heuristics (MRV and friends).
//! - [`search`] — the backtracking driver tying the above together.
//! - [`futoshiki`] — example model builders encoding Futoshiki boards.
//!
//! # Example
//!
//! ```
//! use fdcsp::csp::{Csp, TableConstraint, Variable};
//! use fdcsp::heuristics::VarOrdering;
//! use fdcsp::propagators::Propagator;
//! use fdcsp::search::{bt_search, SearchConfig, SearchStatus};
//!
//! // x < y over {1, 2}: the only solution is x = 1, y = 2.
//! let mut csp = Csp::new("tiny");
//! let x = csp.add_var(Variable::new("x", vec![1, 2]));
//! let y = csp.add_var(Variable::new("y", vec![1, 2]));
//! let mut lt = TableConstraint::new("x<y", vec![x, y]);
//! lt.add_satisfying_tuple(vec![1, 2]).unwrap();
//! csp.add_constraint(lt).unwrap();
//!
//! let result = bt_search(
//!     &mut csp,
//!     Propagator::ForwardChecking,
//!     VarOrdering::Mrv,
//!     &SearchConfig::default(),
//! );
//! assert_eq!(result.status, SearchStatus::Satisfied);
//! assert_eq!(csp.var(x).assigned_value(), Some(1));
//! assert_eq!(csp.var(y).assigned_value(), Some(2));
//! ```

pub mod csp;
pub mod futoshiki;
pub mod heuristics;
pub mod propagators;
pub mod search;
