//! This module defines the core data structures used throughout the machine:
//! transitions, the transition table, decoded tapes, and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Represents the possible directions the machine's head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Returns the single-character wire form used by the transition grammar.
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    /// Parses the wire form back into a `Direction`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Represents a single transition rule.
///
/// A transition fires when the machine is in `from_state` and the symbol under
/// the head equals `read`. `write` is the replacement symbol; `None` means the
/// cell under the head is deleted, shortening the tape by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state this rule belongs to.
    pub from_state: String,
    /// The symbol that must be under the head for the rule to fire.
    pub read: char,
    /// The symbol written over the cell, or `None` to delete the cell.
    pub write: Option<char>,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The next state the machine transitions to.
    pub next_state: String,
}

/// A mapping from control-state name to the ordered transitions for that state.
///
/// Lookup within a state preserves parse order (first match wins). Iteration
/// across states follows first-seen insertion order, so encoding a table back
/// into its textual form is deterministic even though relative ordering across
/// states may differ from the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    order: Vec<String>,
    rules: HashMap<String, Vec<Transition>>,
}

impl TransitionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transition to its state's rule list, registering the state
    /// on first sight.
    pub fn insert(&mut self, transition: Transition) {
        let state = transition.from_state.clone();
        match self.rules.get_mut(&state) {
            Some(transitions) => transitions.push(transition),
            None => {
                self.order.push(state.clone());
                self.rules.insert(state, vec![transition]);
            }
        }
    }

    /// Returns the transitions for a state in parse order.
    ///
    /// Unknown states yield an empty slice; an absent state is legal and means
    /// the machine halts on its next step.
    pub fn get(&self, state: &str) -> &[Transition] {
        self.rules.get(state).map_or(&[], Vec::as_slice)
    }

    /// Returns the state names in first-seen order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns all transitions, grouped by first-seen state order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.order.iter().flat_map(|state| self.rules[state].iter())
    }

    /// Returns the total number of transitions in the table.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Checks whether the table holds no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        let mut table = Self::new();
        for transition in iter {
            table.insert(transition);
        }
        table
    }
}

/// A decoded tape: its cells and the head index into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    /// The tape contents, one symbol per cell.
    pub cells: Vec<char>,
    /// The index of the cell currently under the head.
    pub head: usize,
}

/// Errors raised when decoding a combined machine string.
///
/// The clause and tape codecs themselves never fail (malformed clauses are
/// dropped, malformed tapes fall back to head 0); only the outer
/// `<transitions>/<state>/<tape>` shape is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input did not contain the two `/` separators.
    #[error("expected <transitions>/<state>/<tape>, got {0:?}")]
    MalformedPath(String),
}
