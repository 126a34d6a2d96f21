//! This module provides the encode side of the wire grammar: rendering a
//! transition table, a tape with its head marker, and a whole machine
//! snapshot back into the textual form a client uses for its next request.

use crate::machine::Machine;
use crate::types::{Transition, TransitionTable};

/// Encodes a machine snapshot into the canonical
/// `<transitions>/<state>/<tape>` form.
///
/// The string doubles as the human-readable representation and the literal
/// path suffix for the next request.
pub fn encode(machine: &Machine) -> String {
    format!(
        "{}/{}/{}",
        encode_transitions(machine.table()),
        machine.state(),
        encode_tape(machine.tape(), machine.head())
    )
}

/// Encodes a transition table back into the clause grammar.
///
/// Transitions are grouped by first-seen state order, parse order within a
/// state. That ordering is the supported contract: it may differ from the
/// original input's interleaving across states, but it is deterministic, so
/// clients can treat the transitions string as an opaque round-trip token.
pub fn encode_transitions(table: &TransitionTable) -> String {
    table
        .transitions()
        .map(encode_clause)
        .collect::<Vec<_>>()
        .join(";")
}

fn encode_clause(transition: &Transition) -> String {
    let write = transition.write.map(String::from).unwrap_or_default();
    format!(
        "{}({}{}){}{}",
        transition.from_state,
        transition.read,
        write,
        transition.direction.as_char(),
        transition.next_state
    )
}

/// Encodes a tape by wrapping the cell under the head in `|` markers.
///
/// An empty tape (possible after repeated cell deletions) renders as `||`.
pub fn encode_tape(cells: &[char], head: usize) -> String {
    let Some(symbol) = cells.get(head) else {
        return "||".to_string();
    };

    let left: String = cells[..head].iter().collect();
    let right: String = cells[head + 1..].iter().collect();
    format!("{left}|{symbol}|{right}")
}
