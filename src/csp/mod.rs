//! The CSP model layer.
//!
//! # Key Components
//!
//! - **Variables**: [`Variable`] — finite ordered domain, live
//!   current-domain flags, optional assignment.
//! - **Constraints**: [`TableConstraint`] — an ordered scope plus an
//!   explicit set of satisfying value tuples (extensional/table form).
//! - **Instance**: [`Csp`] — owns both and indexes constraints by the
//!   variables they touch.
//!
//! # Design
//!
//! The `Csp` is the single owner of all mutable domain state. Handles
//! ([`VarId`], [`ConstraintId`]) stand in for references everywhere, so
//! propagators can take transient exclusive write access to domains
//! while reading constraints, with no sharing or interior mutability.
//!
//! Domain pruning is reversible and logged: every removal is reported to
//! the caller, which restores it verbatim when a search branch unwinds.
//! Double-pruning a value, or restoring one that is not pruned, is a
//! caller bug and surfaces as an error.

mod constraint;
mod model;
mod variable;

pub use constraint::{ConstraintId, TableConstraint};
pub use model::Csp;
pub use variable::{VarId, Variable};
