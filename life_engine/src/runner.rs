//! Iteration driver — bounded multi-generation runs.
//!
//! Drives the transition engine one generation at a time, fingerprinting
//! each state, until the state stops changing, a previously visited state
//! recurs, or the iteration budget runs out. The visited-hash set is local
//! to one run and discarded at completion.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::codec::{self, StateHash};
use crate::transition::next_generation;

/// Why a bounded run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// State unchanged between consecutive generations (a fixed point).
    Stable,
    /// A state the run already stepped from reappeared as a starting state
    /// (a cycle of period >= 2).
    Loop,
    /// Neither condition met within the budget.
    MaxIterationsReached,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndReason::Stable => "Stable",
            EndReason::Loop => "Loop",
            EndReason::MaxIterationsReached => "MaxIterationsReached",
        };
        write!(f, "{}", name)
    }
}

/// Result of [`run_until_stable_or_cycle`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The grid at termination.
    pub board: Board,
    /// Fingerprint of the final grid.
    pub hash: StateHash,
    /// Generations actually applied before stopping.
    pub iterations: u32,
    pub end_reason: EndReason,
}

/// One generation step.
pub fn advance_one(board: &Board) -> (Board, StateHash) {
    next_generation(board)
}

/// Apply exactly `iterations` generations, feeding each step's output into
/// the next. Intermediate states are not retained. Callers validate
/// `iterations >= 1`.
pub fn advance_n(board: &Board, iterations: u32) -> (Board, StateHash) {
    let mut current = board.clone();
    let mut hash = codec::state_hash(&current);

    for _ in 0..iterations {
        let (next, next_hash) = next_generation(&current);
        current = next;
        hash = next_hash;
    }

    (current, hash)
}

/// Step until the board stabilizes, revisits an earlier state, or exhausts
/// the budget.
///
/// The membership check runs against the *current* pre-step fingerprint, so
/// a cycle is detected the moment a state the run has already stepped from
/// reappears as a starting state. The unchanged-hash check fires first,
/// which is why a period-1 recurrence reports `Stable`, never `Loop`. A
/// board whose very first generation is already stable reports `Stable`
/// with 0 iterations.
pub fn run_until_stable_or_cycle(board: &Board, max_iterations: u32) -> RunOutcome {
    let mut current = board.clone();
    let mut current_hash = codec::state_hash(&current);
    let mut seen: HashSet<StateHash> = HashSet::new();
    let mut iterations = 0u32;

    while iterations < max_iterations {
        if seen.contains(&current_hash) {
            return RunOutcome {
                board: current,
                hash: current_hash,
                iterations,
                end_reason: EndReason::Loop,
            };
        }
        seen.insert(current_hash);

        let (next, next_hash) = next_generation(&current);

        if next_hash == current_hash {
            return RunOutcome {
                board: current,
                hash: current_hash,
                iterations,
                end_reason: EndReason::Stable,
            };
        }

        current = next;
        current_hash = next_hash;
        iterations += 1;
    }

    RunOutcome {
        board: current,
        hash: current_hash,
        iterations,
        end_reason: EndReason::MaxIterationsReached,
    }
}
