//! This crate provides the core logic for running a Turing machine over HTTP,
//! one step per request. It includes the wire-grammar codecs for transition
//! tables and tapes, the single-step engine, the state serializer that builds
//! the next request path, and a collection of predefined demo machines.

pub mod encoder;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod types;

/// Re-exports the encoding functions from the encoder module.
pub use encoder::{encode, encode_tape, encode_transitions};
/// Re-exports the `Machine` snapshot and `Step` result from the machine module.
pub use machine::{Machine, Step};
/// Re-exports the decoding functions from the parser module.
pub use parser::{decode_path, parse_tape, parse_transitions};
/// Re-exports the predefined machines from the programs module.
pub use programs::{ProgramInfo, PROGRAMS};
/// Re-exports the core data types from the types module.
pub use types::{DecodeError, Direction, Tape, Transition, TransitionTable};
