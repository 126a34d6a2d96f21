//! This module defines the `Machine` struct, a single-tape Turing machine
//! snapshot that advances by exactly one transition per `step` call. A fresh
//! snapshot is built per request, stepped once, serialized, and discarded.

use crate::encoder;
use crate::types::{Direction, Tape, Transition, TransitionTable};
use std::fmt;

/// Represents the outcome of one machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition fired and the machine can keep running.
    Continue,
    /// The machine has halted; further steps are no-ops.
    Halt,
}

/// A single-tape Turing machine snapshot.
///
/// Holds the current control state, the tape cells, the head index, the
/// halted flag, and the transition table driving it. The table is immutable
/// once constructed; the snapshot mutates only through `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    state: String,
    tape: Vec<char>,
    head: usize,
    halted: bool,
    table: TransitionTable,
}

impl Machine {
    /// Creates a new `Machine` from a transition table, an initial control
    /// state, and a decoded tape.
    pub fn new(table: TransitionTable, state: String, tape: Tape) -> Self {
        Self {
            state,
            tape: tape.cells,
            head: tape.head,
            halted: false,
            table,
        }
    }

    /// Executes exactly one step of the machine.
    ///
    /// The first transition for the current state whose `read` symbol equals
    /// the symbol under the head fires: the cell is overwritten (or deleted
    /// for an empty replacement), the head moves, and the control state
    /// changes. No matching transition halts the machine with the snapshot
    /// otherwise unchanged.
    ///
    /// Boundary policy: running off the right end clamps the head to the last
    /// cell and halts. Moving left at cell 0 clamps the head to 0 and halts
    /// rather than wrapping around.
    pub fn step(&mut self) -> Step {
        if self.halted {
            return Step::Halt;
        }

        // An empty tape (or out-of-range head) has no symbol to match.
        let transition = match self.transition().cloned() {
            Some(t) => t,
            None => {
                self.halted = true;
                return Step::Halt;
            }
        };

        match transition.write {
            Some(symbol) => self.tape[self.head] = symbol,
            // Empty replacement deletes the cell, shortening the tape.
            None => {
                self.tape.remove(self.head);
            }
        }

        match transition.direction {
            Direction::Right => self.head += 1,
            Direction::Left => {
                if self.head == 0 {
                    self.halted = true;
                } else {
                    self.head -= 1;
                }
            }
        }

        self.state = transition.next_state;

        if self.head >= self.tape.len() {
            self.head = self.tape.len().saturating_sub(1);
            self.halted = true;
        }

        if self.halted {
            Step::Halt
        } else {
            Step::Continue
        }
    }

    /// Finds the first transition for the current state matching the symbol
    /// under the head, or `None` when the machine must halt.
    pub fn transition(&self) -> Option<&Transition> {
        let symbol = *self.tape.get(self.head)?;
        self.table.get(&self.state).iter().find(|t| t.read == symbol)
    }

    /// Returns the current control state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the tape cells.
    pub fn tape(&self) -> &[char] {
        &self.tape
    }

    /// Returns the tape contents as a `String`.
    pub fn tape_string(&self) -> String {
        self.tape.iter().collect()
    }

    /// Returns the head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Checks whether the machine has halted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}

impl fmt::Display for Machine {
    /// Renders the canonical `<transitions>/<state>/<tape>` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode(self))
    }
}
