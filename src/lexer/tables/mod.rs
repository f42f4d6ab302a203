// src/lexer/tables/mod.rs
pub mod build;
pub mod charclass;
pub mod dfa;
pub mod finals;
pub mod io;
pub mod rules;
pub mod tokens;

/// State number. State 0 is the start state.
pub type StateId = u32;

pub use build::TableBuilder;
pub use dfa::{Automaton, NO_TRANSITION, START_STATE};
pub use finals::FinalStates;
pub use io::{load_automaton_json_bytes, load_final_states_json_bytes, save_automaton_json};
pub use rules::{Rule, SymbolClass, parse_rules};
pub use tokens::{Token, TokenCategory};
