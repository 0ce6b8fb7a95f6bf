//! Solution data model: the immutable snapshot returned for one query.
//!
//! A [`SolutionSet`] is built incrementally by the collector and handed to
//! the caller as a read-only value. It has no relation to later queries:
//! each execution produces a fresh set.

use std::fmt;
use std::ops::Index;
use std::slice;

// ============================================================================
// BINDING
// ============================================================================

/// A bound variable in one solution: name, type tag, rendered value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    name: String,
    ty: String,
    value: String,
}

impl Binding {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The engine's type tag for the value (e.g. `atom`, `number`).
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The engine's string rendering of the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) = {}", self.name, self.ty, self.value)
    }
}

// ============================================================================
// SOLUTION
// ============================================================================

/// One accepted answer: the variable bindings of a single candidate, in
/// engine emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    bindings: Vec<Binding>,
}

impl Solution {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Binding> {
        self.bindings.get(index)
    }

    /// Look up a binding by variable name.
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    pub fn iter(&self) -> slice::Iter<'_, Binding> {
        self.bindings.iter()
    }
}

impl Index<usize> for Solution {
    type Output = Binding;

    fn index(&self, index: usize) -> &Binding {
        &self.bindings[index]
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Binding;
    type IntoIter = slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bindings {
            writeln!(f, "{}", binding)?;
        }
        Ok(())
    }
}

// ============================================================================
// SOLUTION SET
// ============================================================================

/// The final snapshot for one query execution.
///
/// `success` and `error` are not mutually exclusive: solutions accepted
/// before the engine entered its error state are retained alongside the
/// error text, because the error flag is only sampled once per pulled
/// candidate. A set with `success == false` and no error is a plain "no":
/// the query failed with no accepted candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionSet {
    query: String,
    success: bool,
    error: Option<String>,
    solutions: Vec<Solution>,
}

impl SolutionSet {
    pub(crate) fn new(query: String) -> Self {
        Self {
            query,
            success: false,
            error: None,
            solutions: Vec::new(),
        }
    }

    /// Open a new solution; subsequent bindings append to it.
    pub(crate) fn begin_solution(&mut self) {
        self.solutions.push(Solution::new());
    }

    /// Append a binding to the solution opened by [`begin_solution`].
    ///
    /// [`begin_solution`]: Self::begin_solution
    pub(crate) fn push_binding(&mut self, binding: Binding) {
        debug_assert!(
            !self.solutions.is_empty(),
            "push_binding before begin_solution"
        );
        if let Some(current) = self.solutions.last_mut() {
            current.push(binding);
        }
    }

    pub(crate) fn mark_success(&mut self) {
        self.success = true;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// The normalized (dot-terminated) query text this set answers.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether any candidate was accepted.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The engine error that stopped iteration, if one was observed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of accepted solutions.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Solution> {
        self.solutions.iter()
    }
}

impl Index<usize> for SolutionSet {
    type Output = Solution;

    fn index(&self, index: usize) -> &Solution {
        &self.solutions[index]
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl fmt::Display for SolutionSet {
    /// Render for a user: the error text if present; `yes` for success with
    /// nothing to report; a numbered listing of the solutions otherwise;
    /// `no` for plain failure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return f.write_str(error);
        }
        if !self.success {
            return f.write_str("no");
        }
        if self.solutions.is_empty() {
            return f.write_str("yes");
        }
        for (i, solution) in self.solutions.iter().enumerate() {
            writeln!(f, "Solution {}", i + 1)?;
            write!(f, "{}", solution)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(query: &str) -> SolutionSet {
        SolutionSet::new(query.to_string())
    }

    #[test]
    fn binding_renders_name_type_value() {
        let b = Binding::new("X", "atom", "socrates");
        assert_eq!(b.to_string(), "X (atom) = socrates");
    }

    #[test]
    fn fresh_set_renders_no() {
        let set = set_with("mortal(r2d2).");
        assert!(!set.success());
        assert!(!set.has_error());
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "no");
    }

    #[test]
    fn successful_empty_set_renders_yes() {
        let mut set = set_with("mortal(socrates).");
        set.mark_success();
        assert_eq!(set.to_string(), "yes");
    }

    #[test]
    fn error_rendering_wins_over_success() {
        let mut set = set_with("mem(a,[a].");
        set.mark_success();
        set.set_error("syntax error: unmatched bracket".to_string());
        assert_eq!(set.to_string(), "syntax error: unmatched bracket");
        // Success survives alongside the error.
        assert!(set.success());
    }

    #[test]
    fn listing_is_numbered_in_acceptance_order() {
        let mut set = set_with("human(H).");
        set.mark_success();
        set.begin_solution();
        set.push_binding(Binding::new("H", "atom", "socrates"));
        set.begin_solution();
        set.push_binding(Binding::new("H", "atom", "plato"));

        assert_eq!(
            set.to_string(),
            "Solution 1\nH (atom) = socrates\nSolution 2\nH (atom) = plato\n"
        );
    }

    #[test]
    fn indexed_and_named_access() {
        let mut set = set_with("pair(X,Y).");
        set.mark_success();
        set.begin_solution();
        set.push_binding(Binding::new("X", "atom", "a"));
        set.push_binding(Binding::new("Y", "number", "1"));

        assert_eq!(set.len(), 1);
        assert_eq!(set[0][1].name(), "Y");
        assert_eq!(set[0].binding("X").unwrap().value(), "a");
        assert!(set[0].binding("Z").is_none());
        assert_eq!(set.get(1), None);
    }

    #[test]
    fn iteration_preserves_emission_order() {
        let mut set = set_with("pair(X,Y).");
        set.mark_success();
        set.begin_solution();
        set.push_binding(Binding::new("X", "atom", "a"));
        set.push_binding(Binding::new("Y", "number", "1"));

        let names: Vec<&str> = set[0].iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["X", "Y"]);
    }
}
