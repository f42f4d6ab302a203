// src/lexer/sink.rs
// Consumers of scanned tokens, and drivers that feed them.

use std::io::Write;

use anyhow::{Result, anyhow};
use rayon::prelude::*;

use crate::lexer::{
    error::LexError,
    scanner::{ScanOutput, Scanner},
    tables::{Automaton, Token},
};

/// Where tokens go once scanned.
pub trait TokenSink {
    fn accept(&mut self, token: Token, lexeme: &str) -> Result<()>;

    /// Called at most once, after the last accepted token.
    fn error(&mut self, err: LexError) -> Result<()>;
}

/// Writes `CATEGORY lexeme` per token and a single
/// `Lexer Error at character number N` line on failure.
pub struct LineSink<W: Write> {
    w: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(w: W) -> Self {
        Self { w }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> TokenSink for LineSink<W> {
    fn accept(&mut self, token: Token, lexeme: &str) -> Result<()> {
        writeln!(self.w, "{} {}", token.category, lexeme)?;
        Ok(())
    }

    fn error(&mut self, err: LexError) -> Result<()> {
        write!(self.w, "{err}")?;
        self.w.flush()?;
        Ok(())
    }
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    fn accept(&mut self, token: Token, lexeme: &str) -> Result<()> {
        (**self).accept(token, lexeme)
    }

    fn error(&mut self, err: LexError) -> Result<()> {
        (**self).error(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveReport {
    pub tokens: usize,
    pub error: Option<LexError>,
}

/// Pumps `scanner` into `sink` until end of input or the first lex error.
/// A lex error is handed to the sink and reported, not returned as `Err`;
/// `Err` means the sink itself failed.
pub fn drive<S: TokenSink>(scanner: &mut Scanner<'_>, mut sink: S) -> Result<DriveReport> {
    let mut tokens = 0usize;
    loop {
        match scanner.next_token() {
            Ok(Some(token)) => {
                let lexeme = scanner
                    .lexeme(token.id)
                    .ok_or_else(|| anyhow!("token id {} was never interned", token.id))?;
                sink.accept(token, lexeme)?;
                tokens += 1;
            }
            Ok(None) => return Ok(DriveReport { tokens, error: None }),
            Err(err) => {
                sink.error(err)?;
                return Ok(DriveReport {
                    tokens,
                    error: Some(err),
                });
            }
        }
    }
}

/// Scans every buffer on the rayon pool against one shared automaton.
/// Each buffer gets its own scanner and intern table; output order matches
/// input order.
pub fn scan_many<B>(automaton: &Automaton, buffers: &[B]) -> Vec<ScanOutput>
where
    B: AsRef<[u8]> + Sync,
{
    let outputs: Vec<ScanOutput> = buffers
        .par_iter()
        .map(|buf| Scanner::new(automaton, buf.as_ref()).run())
        .collect();
    log::debug!(
        "[scan_many] {} buffers, {} failed",
        outputs.len(),
        outputs.iter().filter(|o| o.error.is_some()).count()
    );
    outputs
}
