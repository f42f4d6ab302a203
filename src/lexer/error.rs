// src/lexer/error.rs
use thiserror::Error;

use crate::lexer::tables::{StateId, TokenCategory};

/// Lookup failures inside the automaton. The scanner consumes these; they
/// never reach a scanner's caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("no transition from state {state} on byte 0x{byte:02X}")]
    NoTransition { state: StateId, byte: u8 },

    #[error("state {state} is not a final state")]
    Unclassified { state: StateId },
}

/// Problems in a rule file or a final-state classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("line {line}: expected `from to symbol`, found {found} field(s)")]
    MissingField { line: usize, found: usize },

    #[error("line {line}: `{text}` is not a state number")]
    BadState { line: usize, text: String },

    #[error("line {line}: `no` rule without an excluded symbol")]
    MissingExclusion { line: usize },

    #[error("line {line}: unknown excluded symbol `{name}`")]
    UnknownSymbol { line: usize, name: String },

    #[error("state {state} is classified as both {first} and {second}")]
    OverlappingFinalState {
        state: StateId,
        first: TokenCategory,
        second: TokenCategory,
    },

    #[error("state {from} has an edge to state {to}, past the last state {last}")]
    StateOutOfRange {
        from: StateId,
        to: StateId,
        last: StateId,
    },
}

/// Scanning stalled at byte offset `position`. Terminal for the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Lexer Error at character number {position}")]
pub struct LexError {
    pub position: usize,
}
