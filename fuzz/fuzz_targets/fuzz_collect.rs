//! Fuzz query materialization against arbitrary candidate scripts.
//!
//! The collector must never panic, whatever the engine emits, and the
//! returned solution set must uphold its invariants: failure without an
//! error means an empty set, and every recorded solution is non-empty.

#![no_main]

use std::fmt;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use solset::{run_query, Binding, BindingEvent, Candidate, Solver};

#[derive(Arbitrary, Debug)]
enum FuzzEvent {
    Binding { name: String, ty: String, value: String },
    EndOfBindings,
}

#[derive(Arbitrary, Debug)]
struct FuzzStep {
    satisfied: bool,
    errors: bool,
    events: Vec<FuzzEvent>,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    query: String,
    max_solutions: u8,
    script: Vec<FuzzStep>,
}

struct FuzzCandidate {
    satisfied: bool,
    events: Vec<BindingEvent>,
}

impl fmt::Display for FuzzCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fuzz candidate")
    }
}

impl Candidate for FuzzCandidate {
    type Bindings = std::vec::IntoIter<BindingEvent>;

    fn satisfied(&self) -> bool {
        self.satisfied
    }

    fn bindings(&self) -> Self::Bindings {
        self.events.clone().into_iter()
    }
}

struct FuzzSolver {
    script: Vec<FuzzStep>,
    pos: usize,
    errored: bool,
}

impl Solver for FuzzSolver {
    type Candidate = FuzzCandidate;

    fn submit(&mut self, _query: &str) {
        self.pos = 0;
        self.errored = false;
    }

    fn next_candidate(&mut self) -> Option<FuzzCandidate> {
        let step = self.script.get(self.pos)?;
        self.pos += 1;
        if step.errors {
            self.errored = true;
        }
        let events = step
            .events
            .iter()
            .map(|e| match e {
                FuzzEvent::Binding { name, ty, value } => {
                    BindingEvent::Binding(Binding::new(name.clone(), ty.clone(), value.clone()))
                }
                FuzzEvent::EndOfBindings => BindingEvent::EndOfBindings,
            })
            .collect();
        Some(FuzzCandidate { satisfied: step.satisfied, events })
    }

    fn errored(&self) -> bool {
        self.errored
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut solver = FuzzSolver {
        script: input.script,
        pos: 0,
        errored: false,
    };
    let set = run_query(&mut solver, &input.query, input.max_solutions as usize);

    assert!(set.query().ends_with('.'));
    if !set.success() && set.error().is_none() {
        assert!(set.is_empty());
    }
    if input.max_solutions > 0 {
        assert!(set.len() <= input.max_solutions as usize);
    }
    for solution in &set {
        assert!(!solution.is_empty());
    }
});
