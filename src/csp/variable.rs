//! CSP variables: fixed domains, live current-domain flags, assignment.

/// A handle to a variable owned by a [`Csp`](super::Csp).
///
/// Handles are issued by [`Csp::add_var`](super::Csp::add_var) and are
/// only meaningful for the `Csp` that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of this variable in its CSP's registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A finite-domain decision variable.
///
/// The full `domain` is fixed at construction. The *current* domain is
/// the subset of values still considered possible: it shrinks through
/// [`prune`](Variable::prune) and grows back only through
/// [`restore`](Variable::restore), never beyond the full domain.
///
/// While a variable is assigned, its current domain is the assigned
/// value alone (intersected with the live flags, so pruning the assigned
/// value empties it).
///
/// # Examples
///
/// ```
/// use fdcsp::csp::Variable;
///
/// let mut v = Variable::new("x", vec![1, 2, 3]);
/// assert_eq!(v.cur_domain_size(), 3);
/// v.prune(2).unwrap();
/// assert_eq!(v.cur_domain(), vec![1, 3]);
/// v.restore(2).unwrap();
/// assert_eq!(v.cur_domain_size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Variable {
    /// Variable name (unique identifier within a model).
    pub name: String,
    /// Full admissible domain, fixed at construction.
    domain: Vec<i64>,
    /// Current-domain membership flag per domain position.
    live: Vec<bool>,
    /// Assigned value, if any.
    assigned: Option<i64>,
}

impl Variable {
    /// Creates a variable over the given ordered domain.
    pub fn new(name: impl Into<String>, domain: Vec<i64>) -> Self {
        let live = vec![true; domain.len()];
        Self {
            name: name.into(),
            domain,
            live,
            assigned: None,
        }
    }

    /// Creates a variable with a singleton domain, pre-assigned to it.
    pub fn fixed(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            domain: vec![value],
            live: vec![true],
            assigned: Some(value),
        }
    }

    /// The full (construction-time) domain.
    pub fn domain(&self) -> &[i64] {
        &self.domain
    }

    /// Size of the full domain.
    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    fn position(&self, value: i64) -> Option<usize> {
        self.domain.iter().position(|&d| d == value)
    }

    /// Whether `value` is in the current domain.
    ///
    /// For an assigned variable only the assigned value qualifies, and
    /// only while it has not itself been pruned.
    pub fn in_cur_domain(&self, value: i64) -> bool {
        let Some(pos) = self.position(value) else {
            return false;
        };
        match self.assigned {
            Some(a) => a == value && self.live[pos],
            None => self.live[pos],
        }
    }

    /// The current domain, in domain order.
    pub fn cur_domain(&self) -> Vec<i64> {
        match self.assigned {
            Some(a) => {
                if self.in_cur_domain(a) {
                    vec![a]
                } else {
                    Vec::new()
                }
            }
            None => self
                .domain
                .iter()
                .zip(&self.live)
                .filter_map(|(&v, &ok)| ok.then_some(v))
                .collect(),
        }
    }

    /// Number of values in the current domain.
    pub fn cur_domain_size(&self) -> usize {
        match self.assigned {
            Some(a) => usize::from(self.in_cur_domain(a)),
            None => self.live.iter().filter(|&&ok| ok).count(),
        }
    }

    /// Removes `value` from the current domain.
    ///
    /// A value may be pruned at most once without an intervening
    /// [`restore`](Variable::restore); violating that is a caller bug and
    /// reported as an error rather than silently ignored.
    pub fn prune(&mut self, value: i64) -> Result<(), String> {
        let pos = self
            .position(value)
            .ok_or_else(|| format!("{}: cannot prune {value}: not in domain", self.name))?;
        if !self.live[pos] {
            return Err(format!("{}: value {value} pruned twice", self.name));
        }
        self.live[pos] = false;
        Ok(())
    }

    /// Returns a previously pruned `value` to the current domain.
    ///
    /// Restoring a value that is not currently pruned is an error.
    pub fn restore(&mut self, value: i64) -> Result<(), String> {
        let pos = self
            .position(value)
            .ok_or_else(|| format!("{}: cannot restore {value}: not in domain", self.name))?;
        if self.live[pos] {
            return Err(format!("{}: value {value} is not pruned", self.name));
        }
        self.live[pos] = true;
        Ok(())
    }

    /// Assigns `value`, which must be in the current domain.
    ///
    /// Assignment does not prune: the other live flags are untouched, the
    /// current domain is merely viewed as the singleton `{value}`.
    pub fn assign(&mut self, value: i64) -> Result<(), String> {
        if self.assigned.is_some() {
            return Err(format!("{}: already assigned", self.name));
        }
        if !self.in_cur_domain(value) {
            return Err(format!(
                "{}: cannot assign {value}: not in current domain",
                self.name
            ));
        }
        self.assigned = Some(value);
        Ok(())
    }

    /// Clears the assignment.
    pub fn unassign(&mut self) -> Result<(), String> {
        if self.assigned.is_none() {
            return Err(format!("{}: not assigned", self.name));
        }
        self.assigned = None;
        Ok(())
    }

    /// The live values regardless of assignment. Unlike
    /// [`cur_domain`](Variable::cur_domain), the assigned-value view does
    /// not apply here, so prune/restore bookkeeping is fully visible.
    pub fn live_values(&self) -> Vec<i64> {
        self.domain
            .iter()
            .zip(&self.live)
            .filter_map(|(&v, &ok)| ok.then_some(v))
            .collect()
    }

    /// The assigned value, if any.
    pub fn assigned_value(&self) -> Option<i64> {
        self.assigned
    }

    /// Whether this variable is assigned.
    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }
}
