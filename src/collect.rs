//! Candidate-stream materialization.
//!
//! This module pulls candidates from a [`Solver`], decides when to stop
//! pulling, groups bindings into solutions, and assembles the final
//! [`SolutionSet`]. The search underneath may be unbounded, so termination is
//! always decided here by the stop conditions, never by waiting for the
//! stream to end on its own (a scripted or otherwise finite stream still
//! terminates the loop cleanly).
//!
//! The stop conditions interact: an engine error beats everything and keeps
//! previously accepted solutions; an unsatisfied first candidate is a plain
//! "no"; a candidate that yields no bindings before any candidate ever has
//! ends the search (the "yes, nothing to report" answer); and the caller's
//! solution cap bounds acceptance. The [`Collector`] keeps these conditions
//! in one place, as an explicit state machine stepped once per candidate.

use tracing::{debug, trace};

use crate::engine::{BindingEvent, Candidate, Solver};
use crate::normalize::normalize_query;
use crate::solution::SolutionSet;

// ============================================================================
// COLLECTOR STATE MACHINE
// ============================================================================

/// Search phase across the whole execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// No candidate accepted yet. An unsatisfied candidate here means the
    /// query has no solutions and ends the search.
    Searching,
    /// At least one candidate accepted. From here on candidates are recorded
    /// regardless of their satisfied flag (see the note in [`Collector::step`]).
    Accepting,
}

/// Whether to keep pulling candidates after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Continue,
    Stop,
}

/// Incremental builder for one query execution.
struct Collector {
    set: SolutionSet,
    phase: Phase,
    /// Latched when any real binding has been recorded, for any candidate.
    saw_binding: bool,
    /// Candidates processed through the grouping step.
    accepted: usize,
    /// Accepted-candidate cap; 0 means unbounded.
    max_solutions: usize,
}

impl Collector {
    fn new(query: String, max_solutions: usize) -> Self {
        Self {
            set: SolutionSet::new(query),
            phase: Phase::Searching,
            saw_binding: false,
            accepted: 0,
            max_solutions,
        }
    }

    /// Process one pulled candidate. `errored` is the solver's persistent
    /// error flag, sampled after the pull.
    fn step<C: Candidate>(&mut self, candidate: &C, errored: bool) -> Control {
        trace!(satisfied = candidate.satisfied(), "pulled candidate");

        // Engine error wins over everything else. The candidate's rendering
        // carries the detail; solutions accepted so far stay in the set, and
        // the success flag keeps whatever value earlier candidates gave it.
        if errored {
            debug!(detail = %candidate, "solver entered error state");
            self.set.set_error(candidate.to_string());
            return Control::Stop;
        }

        // An unsatisfied candidate before any acceptance: the query has no
        // solutions. Not an error, and nothing further is pulled.
        if self.phase == Phase::Searching && !candidate.satisfied() {
            debug!("first candidate unsatisfied; query has no solutions");
            return Control::Stop;
        }

        // Acceptance. Success is latched even when this candidate's satisfied
        // flag is false (only reachable in the Accepting phase): engines in
        // this family emit one trailing search-exhausted candidate after
        // genuine answers, and the flag must survive it.
        self.set.mark_success();

        let mut opened = false;
        for event in candidate.bindings() {
            let binding = match event {
                BindingEvent::Binding(b) => b,
                BindingEvent::EndOfBindings => break,
            };
            if !opened {
                opened = true;
                self.set.begin_solution();
            }
            self.set.push_binding(binding);
            self.saw_binding = true;
        }

        self.accepted += 1;
        // Cap reached (a cap of 0 never trips: the counter is at least 1
        // here), or no candidate has ever produced a binding. The latter ends
        // the search even though later candidates might have bound variables:
        // a binding-free acceptance is the whole answer.
        if self.accepted == self.max_solutions {
            debug!(accepted = self.accepted, "solution cap reached");
            return Control::Stop;
        }
        if !self.saw_binding {
            debug!("no bindings recorded; answer is complete");
            return Control::Stop;
        }

        self.phase = Phase::Accepting;
        Control::Continue
    }

    fn finish(self) -> SolutionSet {
        self.set
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Run a query to completion and return its materialized solution set.
///
/// The query is dot-terminated if necessary, submitted to the solver, and the
/// candidate stream consumed under the stop conditions described in the
/// module docs. `max_solutions` caps the number of accepted candidates; 0
/// means unbounded.
///
/// This never fails: engine errors are captured in the returned set's error
/// field, alongside any solutions accepted before the error was observed.
pub fn run_query<S: Solver>(solver: &mut S, query: &str, max_solutions: usize) -> SolutionSet {
    let query = normalize_query(query);
    debug!(query = %query, max_solutions, "running query");

    solver.submit(&query);
    let mut collector = Collector::new(query, max_solutions);

    while let Some(candidate) = solver.next_candidate() {
        let errored = solver.errored();
        if collector.step(&candidate, errored) == Control::Stop {
            break;
        }
    }

    collector.finish()
}

/// [`run_query`] without a solution cap.
pub fn run_query_unbounded<S: Solver>(solver: &mut S, query: &str) -> SolutionSet {
    run_query(solver, query, 0)
}
