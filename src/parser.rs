//! This module provides the decode side of the wire grammar: the
//! semicolon-delimited transition clauses and the `|`-marked tape form.
//! Both codecs degrade gracefully instead of erroring, so a malformed
//! request still yields a runnable (if smaller) machine.

use crate::machine::Machine;
use crate::types::{DecodeError, Direction, Tape, Transition, TransitionTable};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One transition clause: `<from>(<read><write?>)<direction><next>`.
    static ref TRANSITION_RE: Regex =
        Regex::new(r"^(?P<from>.+)\((?P<read>.)(?P<write>.?)\)(?P<direction>[<>])(?P<next>.+)$")
            .unwrap();
    /// A tape with an embedded head marker: `<left>|<head>|<right>`.
    static ref TAPE_RE: Regex = Regex::new(r"^(?P<left>[^|]*)\|(?P<head>.)\|(?P<right>.*)$").unwrap();
}

/// Parses a semicolon-delimited transition string into transition records.
///
/// Clauses that do not match the grammar are silently dropped; malformed
/// input degrades to "fewer transitions", never to a failure.
pub fn parse_transitions(input: &str) -> Vec<Transition> {
    input.split(';').filter_map(parse_clause).collect()
}

/// Parses a single transition clause, or `None` if it does not match the
/// grammar. An empty `write` group means the cell under the head is deleted.
fn parse_clause(clause: &str) -> Option<Transition> {
    let caps = TRANSITION_RE.captures(clause)?;

    Some(Transition {
        from_state: caps["from"].to_string(),
        read: caps["read"].chars().next()?,
        write: caps["write"].chars().next(),
        direction: Direction::from_char(caps["direction"].chars().next()?)?,
        next_state: caps["next"].to_string(),
    })
}

/// Parses a tape string of the shape `<left>|<head>|<right>`.
///
/// The decoded cells are `left + head + right` with the head index at
/// `left`'s length. Input without the two-`|` marker falls back to the raw
/// string with the head at 0.
pub fn parse_tape(input: &str) -> Tape {
    match TAPE_RE.captures(input) {
        Some(caps) => {
            let left = &caps["left"];
            let cells = format!("{}{}{}", left, &caps["head"], &caps["right"]);
            Tape {
                cells: cells.chars().collect(),
                head: left.chars().count(),
            }
        }
        None => Tape {
            cells: input.chars().collect(),
            head: 0,
        },
    }
}

/// Decodes a combined `<transitions>/<state>/<tape>` string into a machine.
///
/// This mirrors the HTTP route split; the tape part keeps any further `/`
/// characters verbatim. A leading `/` is tolerated so serialized forms can be
/// fed back unchanged.
pub fn decode_path(path: &str) -> Result<Machine, DecodeError> {
    let mut parts = path.strip_prefix('/').unwrap_or(path).splitn(3, '/');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(transitions), Some(state), Some(tape)) => {
            let table: TransitionTable = parse_transitions(transitions).into_iter().collect();
            Ok(Machine::new(table, state.to_string(), parse_tape(tape)))
        }
        _ => Err(DecodeError::MalformedPath(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_clause() {
        let transitions = parse_transitions("a(ab)>b");
        assert_eq!(
            transitions,
            vec![Transition {
                from_state: "a".to_string(),
                read: 'a',
                write: Some('b'),
                direction: Direction::Right,
                next_state: "b".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_empty_replacement_deletes() {
        let transitions = parse_transitions("a(a)>a");
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].read, 'a');
        assert_eq!(transitions[0].write, None);
    }

    #[test]
    fn test_parse_multiple_clauses() {
        let transitions = parse_transitions("a(ll)>a;a(oo)>b;b(oo)<c");
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[0].from_state, "a");
        assert_eq!(transitions[1].next_state, "b");
        assert_eq!(transitions[2].direction, Direction::Left);
    }

    #[test]
    fn test_malformed_clauses_are_dropped() {
        // Missing direction, missing parens, empty clause, bad direction.
        let transitions = parse_transitions("a(ab)b;noparens;;a(ab)^b;ok(xy)>done");
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from_state, "ok");
        assert_eq!(transitions[0].next_state, "done");
    }

    #[test]
    fn test_all_clauses_malformed_yields_empty_list() {
        assert!(parse_transitions("garbage").is_empty());
        assert!(parse_transitions("").is_empty());
    }

    #[test]
    fn test_parse_tape_with_head_marker() {
        let tape = parse_tape("ab|c|de");
        assert_eq!(tape.cells, vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(tape.head, 2);
    }

    #[test]
    fn test_parse_tape_head_at_start() {
        let tape = parse_tape("|a|bc");
        assert_eq!(tape.cells, vec!['a', 'b', 'c']);
        assert_eq!(tape.head, 0);
    }

    #[test]
    fn test_parse_tape_fallback_without_marker() {
        let tape = parse_tape("loooooop");
        assert_eq!(tape.cells, vec!['l', 'o', 'o', 'o', 'o', 'o', 'o', 'p']);
        assert_eq!(tape.head, 0);
    }

    #[test]
    fn test_parse_tape_fallback_single_bar() {
        // One `|` is not a head marker; the raw string becomes the tape.
        let tape = parse_tape("a|b");
        assert_eq!(tape.cells, vec!['a', '|', 'b']);
        assert_eq!(tape.head, 0);
    }

    #[test]
    fn test_parse_empty_tape() {
        let tape = parse_tape("");
        assert!(tape.cells.is_empty());
        assert_eq!(tape.head, 0);
    }

    #[test]
    fn test_decode_path() {
        let machine = decode_path("a(ab)>b/a/|a|bc").unwrap();
        assert_eq!(machine.state(), "a");
        assert_eq!(machine.tape_string(), "abc");
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.table().len(), 1);
    }

    #[test]
    fn test_decode_path_keeps_slashes_in_tape() {
        let machine = decode_path("a(ab)>b/a/x|y|z/w").unwrap();
        assert_eq!(machine.tape_string(), "xyz/w");
        assert_eq!(machine.head(), 1);
    }

    #[test]
    fn test_decode_path_malformed() {
        let err = decode_path("only/two").unwrap_err();
        assert_eq!(err, DecodeError::MalformedPath("only/two".to_string()));
        assert!(err.to_string().contains("<transitions>/<state>/<tape>"));
    }
}
