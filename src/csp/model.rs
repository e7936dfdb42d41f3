//! The CSP instance: owned variables, constraints, and lookup indexes.

use super::constraint::{ConstraintId, TableConstraint};
use super::variable::{VarId, Variable};

/// One constraint-satisfaction problem instance.
///
/// The `Csp` exclusively owns its variables and constraints; constraints
/// refer to variables through [`VarId`] handles, never by reference.
/// Besides the two arenas it maintains a constraint-by-variable index so
/// propagators can cheaply find every constraint touching a variable.
///
/// # Examples
///
/// ```
/// use fdcsp::csp::{Csp, TableConstraint, Variable};
///
/// let mut csp = Csp::new("tiny");
/// let a = csp.add_var(Variable::new("a", vec![1, 2]));
/// let b = csp.add_var(Variable::new("b", vec![1, 2]));
///
/// let mut ne = TableConstraint::new("a!=b", vec![a, b]);
/// ne.add_satisfying_tuples(vec![vec![1, 2], vec![2, 1]]).unwrap();
/// csp.add_constraint(ne).unwrap();
///
/// assert_eq!(csp.var_count(), 2);
/// assert_eq!(csp.constraints_with(a).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Csp {
    /// Model name.
    pub name: String,
    vars: Vec<Variable>,
    cons: Vec<TableConstraint>,
    /// For each variable, the constraints whose scope includes it.
    cons_with_var: Vec<Vec<ConstraintId>>,
}

impl Csp {
    /// Creates an empty problem instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            cons: Vec::new(),
            cons_with_var: Vec::new(),
        }
    }

    /// Registers a variable and returns its handle.
    pub fn add_var(&mut self, var: Variable) -> VarId {
        let id = VarId(self.vars.len());
        self.vars.push(var);
        self.cons_with_var.push(Vec::new());
        id
    }

    /// Registers a constraint and returns its handle.
    ///
    /// Every scope variable must already be registered, the scope must be
    /// non-empty, and no variable may appear in it twice.
    pub fn add_constraint(&mut self, con: TableConstraint) -> Result<ConstraintId, String> {
        if con.scope().is_empty() {
            return Err(format!("{}: empty scope", con.name));
        }
        for (i, &v) in con.scope().iter().enumerate() {
            if v.0 >= self.vars.len() {
                return Err(format!("{}: unregistered variable in scope", con.name));
            }
            if con.scope()[..i].contains(&v) {
                return Err(format!(
                    "{}: variable {} appears twice in scope",
                    con.name, self.vars[v.0].name
                ));
            }
        }
        let id = ConstraintId(self.cons.len());
        for &v in con.scope() {
            self.cons_with_var[v.0].push(id);
        }
        self.cons.push(con);
        Ok(id)
    }

    /// All variables, in registration order.
    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    /// All constraints, in registration order.
    pub fn constraints(&self) -> &[TableConstraint] {
        &self.cons
    }

    /// Shared access to one variable.
    pub fn var(&self, id: VarId) -> &Variable {
        &self.vars[id.0]
    }

    /// Exclusive access to one variable.
    pub fn var_mut(&mut self, id: VarId) -> &mut Variable {
        &mut self.vars[id.0]
    }

    /// Shared access to one constraint.
    pub fn constraint(&self, id: ConstraintId) -> &TableConstraint {
        &self.cons[id.0]
    }

    /// Number of registered variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of registered constraints.
    pub fn constraint_count(&self) -> usize {
        self.cons.len()
    }

    /// Handles of all variables, in registration order.
    pub fn var_ids(&self) -> impl Iterator<Item = VarId> + '_ {
        (0..self.vars.len()).map(VarId)
    }

    /// Handles of all constraints, in registration order.
    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        (0..self.cons.len()).map(ConstraintId)
    }

    /// Handles of the currently unassigned variables, in registration
    /// order.
    pub fn unassigned_vars(&self) -> Vec<VarId> {
        self.var_ids()
            .filter(|&v| !self.vars[v.0].is_assigned())
            .collect()
    }

    /// The constraints whose scope includes `var`.
    pub fn constraints_with(&self, var: VarId) -> &[ConstraintId] {
        &self.cons_with_var[var.0]
    }

    /// Looks a variable up by name.
    pub fn var_by_name(&self, name: &str) -> Option<VarId> {
        self.var_ids().find(|&v| self.vars[v.0].name == name)
    }

    /// Whether every variable is assigned.
    pub fn fully_assigned(&self) -> bool {
        self.vars.iter().all(Variable::is_assigned)
    }

    /// Checks structural consistency of the instance.
    ///
    /// `add_var`/`add_constraint` maintain these invariants already; this
    /// is a debugging aid for models assembled by builders.
    pub fn validate(&self) -> Result<(), String> {
        for con in &self.cons {
            for &v in con.scope() {
                if v.0 >= self.vars.len() {
                    return Err(format!("{}: unregistered variable in scope", con.name));
                }
            }
        }
        for (i, v) in self.vars.iter().enumerate() {
            if self
                .vars
                .iter()
                .skip(i + 1)
                .any(|other| other.name == v.name)
            {
                return Err(format!("duplicate variable name: {}", v.name));
            }
        }
        Ok(())
    }
}
