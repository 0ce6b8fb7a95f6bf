//! Materialization of Prolog solver answer streams.
//!
//! A resolution engine answers a query with a lazily-produced stream of
//! candidates: each candidate reports whether the query was satisfied at that
//! point of the backtracking search and carries the variable bindings in
//! effect. The stream may be unbounded, and the engine can enter a persistent
//! error state mid-search. This crate turns that stream into a bounded,
//! immutable [`SolutionSet`]: it pulls candidates, decides when to stop,
//! groups bindings into [`Solution`]s, and captures engine errors as data
//! instead of letting them escape.
//!
//! The engine itself (resolution, unification, program loading) is an
//! external collaborator behind the [`Solver`] trait; this crate never
//! performs inference of its own.

pub mod collect;
pub mod engine;
pub mod normalize;
pub mod solution;

pub use collect::{run_query, run_query_unbounded};
pub use engine::{BindingEvent, Candidate, Solver};
pub use normalize::normalize_query;
pub use solution::{Binding, Solution, SolutionSet};
