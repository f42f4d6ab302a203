// src/lexer/mod.rs
pub mod error;
pub mod intern;
pub mod scanner;
pub mod sink;
pub mod tables;

pub use error::{AutomatonError, LexError, SpecError};
pub use intern::{Interner, TokenId};
pub use scanner::{ScanOutput, Scanner};
pub use sink::{DriveReport, LineSink, TokenSink, drive, scan_many};
pub use tables::{Automaton, FinalStates, StateId, Token, TokenCategory};
