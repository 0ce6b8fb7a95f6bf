//! Solver-facing boundary.
//!
//! The resolution engine is an external collaborator: it performs clause
//! resolution, unification, and backtracking search, and exposes the results
//! of a submitted query as a lazily-produced candidate stream. This module
//! defines the minimal contract the materializer consumes.
//!
//! Both sequences involved are pull-based and possibly expensive: drawing the
//! next candidate may trigger unbounded backtracking work inside the engine,
//! and a candidate's binding sequence is itself lazy. Nothing here may assume
//! either sequence is finite.

use std::fmt::Display;

use crate::solution::Binding;

/// One event in a candidate's lazy binding stream.
///
/// The underlying engine terminates each candidate's variable list with a
/// reserved type-tag marker rather than by ending the stream. Lifting that
/// marker into an enum variant keeps it out of the [`Binding`] data model:
/// a recorded binding can never be mistaken for the end-of-list mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindingEvent {
    /// A bound variable: name, type tag, rendered value.
    Binding(Binding),
    /// End of this candidate's bindings. Nothing after this is recorded.
    EndOfBindings,
}

/// One step of the solver's search result stream.
///
/// A candidate reports whether the query was satisfied at this point of the
/// search and lazily yields the variable bindings in effect. Its `Display`
/// rendering doubles as the error detail once the solver's error flag is
/// set: the engine surfaces failures through the same candidate shape.
pub trait Candidate: Display {
    type Bindings: Iterator<Item = BindingEvent>;

    /// Whether the query was satisfied at this point of the search.
    fn satisfied(&self) -> bool;

    /// This candidate's lazy binding sequence. Pulling from it may perform
    /// further engine work.
    fn bindings(&self) -> Self::Bindings;
}

/// The resolution engine, reduced to what materialization needs.
///
/// A submission starts a fresh search; the previous candidate stream is not
/// rewindable. The error flag is persistent: once set it stays set for the
/// remainder of the submission, and the current candidate's `Display`
/// rendering carries the error detail. The engine must not be shared across
/// concurrent materializations, since both the flag and its internal search
/// state are scoped to the execution in progress.
pub trait Solver {
    type Candidate: Candidate;

    /// Submit a (normalized) query, restarting the search.
    fn submit(&mut self, query: &str);

    /// Pull the next candidate of the current submission.
    fn next_candidate(&mut self) -> Option<Self::Candidate>;

    /// Persistent error flag, readable at any point during iteration.
    fn errored(&self) -> bool;
}
