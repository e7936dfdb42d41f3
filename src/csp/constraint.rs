//! Table (extensional) constraints: scope + satisfying-tuple set.

use super::variable::{VarId, Variable};
use std::collections::HashSet;

/// A handle to a constraint owned by a [`Csp`](super::Csp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    /// Position of this constraint in its CSP's registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A constraint defined extensionally by its satisfying value tuples.
///
/// The `scope` is an ordered sequence of variables; satisfying tuples are
/// positional with respect to it. The tuple set is the sole definition of
/// the constraint's semantics — there is no separate predicate.
///
/// Tuples are stored in a hash set keyed by the full positional tuple, so
/// [`check`](TableConstraint::check) is a single membership test
/// regardless of arity.
///
/// # Examples
///
/// ```
/// use fdcsp::csp::{Csp, TableConstraint, Variable};
///
/// let mut csp = Csp::new("demo");
/// let a = csp.add_var(Variable::new("a", vec![1, 2]));
/// let b = csp.add_var(Variable::new("b", vec![1, 2]));
///
/// let mut ne = TableConstraint::new("a!=b", vec![a, b]);
/// ne.add_satisfying_tuples(vec![vec![1, 2], vec![2, 1]]).unwrap();
/// assert!(ne.check(&[1, 2]));
/// assert!(!ne.check(&[1, 1]));
/// ```
#[derive(Debug, Clone)]
pub struct TableConstraint {
    /// Constraint name (for diagnostics; not required to be unique).
    pub name: String,
    scope: Vec<VarId>,
    tuples: HashSet<Vec<i64>>,
}

impl TableConstraint {
    /// Creates a constraint over the given ordered scope, with an empty
    /// (unsatisfiable) tuple set.
    pub fn new(name: impl Into<String>, scope: Vec<VarId>) -> Self {
        Self {
            name: name.into(),
            scope,
            tuples: HashSet::new(),
        }
    }

    /// The ordered scope.
    pub fn scope(&self) -> &[VarId] {
        &self.scope
    }

    /// Number of scope positions.
    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// Number of satisfying tuples.
    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }

    /// Whether `var` appears in the scope.
    pub fn touches(&self, var: VarId) -> bool {
        self.scope.contains(&var)
    }

    /// Adds one satisfying tuple. Errors if its length differs from the
    /// arity.
    pub fn add_satisfying_tuple(&mut self, tuple: Vec<i64>) -> Result<(), String> {
        if tuple.len() != self.arity() {
            return Err(format!(
                "{}: tuple of length {} for arity {}",
                self.name,
                tuple.len(),
                self.arity()
            ));
        }
        self.tuples.insert(tuple);
        Ok(())
    }

    /// Adds a batch of satisfying tuples.
    pub fn add_satisfying_tuples(
        &mut self,
        tuples: impl IntoIterator<Item = Vec<i64>>,
    ) -> Result<(), String> {
        for t in tuples {
            self.add_satisfying_tuple(t)?;
        }
        Ok(())
    }

    /// Whether the positional value tuple satisfies this constraint.
    ///
    /// Pure membership test against the satisfying-tuple set; a tuple of
    /// the wrong length never satisfies.
    pub fn check(&self, values: &[i64]) -> bool {
        values.len() == self.arity() && self.tuples.contains(values)
    }

    /// Number of currently unassigned scope variables.
    pub fn num_unassigned(&self, vars: &[Variable]) -> usize {
        self.scope
            .iter()
            .filter(|&&v| !vars[v.0].is_assigned())
            .count()
    }

    /// The currently unassigned scope variables, in scope order.
    pub fn unassigned_vars(&self, vars: &[Variable]) -> Vec<VarId> {
        self.scope
            .iter()
            .copied()
            .filter(|&v| !vars[v.0].is_assigned())
            .collect()
    }

    /// Whether `(var, value)` has at least one supporting tuple drawn
    /// from the other scope variables' *current* domains.
    ///
    /// Enumerates the Cartesian product of the other variables' current
    /// domains and tests each combination with
    /// [`check`](TableConstraint::check). Nothing is cached: the answer
    /// always reflects the live domains.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not in this constraint's scope.
    pub fn has_support(&self, vars: &[Variable], var: VarId, value: i64) -> bool {
        let pos = self
            .scope
            .iter()
            .position(|&v| v == var)
            .unwrap_or_else(|| panic!("{}: {} not in scope", self.name, vars[var.0].name));

        let domains: Vec<Vec<i64>> = self
            .scope
            .iter()
            .enumerate()
            .map(|(i, &vid)| {
                if i == pos {
                    vec![value]
                } else {
                    vars[vid.0].cur_domain()
                }
            })
            .collect();
        if domains.iter().any(|d| d.is_empty()) {
            return false;
        }

        // Odometer walk over the product of the candidate domains.
        let mut idx = vec![0usize; domains.len()];
        let mut tuple: Vec<i64> = domains.iter().map(|d| d[0]).collect();
        loop {
            if self.check(&tuple) {
                return true;
            }
            let mut k = domains.len();
            loop {
                if k == 0 {
                    return false;
                }
                k -= 1;
                idx[k] += 1;
                if idx[k] < domains[k].len() {
                    tuple[k] = domains[k][idx[k]];
                    break;
                }
                idx[k] = 0;
                tuple[k] = domains[k][0];
            }
        }
    }
}
