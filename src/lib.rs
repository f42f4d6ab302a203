//! Table-driven lexer: an automaton loaded from a plain-text rule file and a
//! maximal-munch scanner that backtracks to the last accepting state.

pub mod lexer;

pub use lexer::{
    Automaton, FinalStates, Interner, LexError, Scanner, StateId, Token, TokenCategory, TokenId,
};
