//! Backtracking search driver.
//!
//! Orchestrates assignment, propagation, and undo: one propagator call
//! before any assignment, one after each assignment, and an exact replay
//! of the returned prunings whenever a branch unwinds. The propagation
//! strategy and variable ordering are pluggable
//! ([`Propagator`](crate::propagators::Propagator),
//! [`VarOrdering`](crate::heuristics::VarOrdering)).

mod config;
mod driver;

pub use config::SearchConfig;
pub use driver::{bt_search, SearchResult, SearchStatus};
