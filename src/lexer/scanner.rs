// src/lexer/scanner.rs
// Maximal-munch scanner over a byte buffer, driven by a shared Automaton.

use crate::lexer::{
    error::LexError,
    intern::{Interner, TokenId},
    tables::{
        Automaton, START_STATE,
        tokens::{Token, TokenCategory, reclassify},
    },
};

/// Longest match seen so far in the current attempt.
#[derive(Debug, Clone, Copy)]
struct Accepted {
    end: usize,
    category: TokenCategory,
}

/// Everything a finished scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub interner: Interner,
    pub error: Option<LexError>,
}

impl ScanOutput {
    pub fn lexeme(&self, token: &Token) -> Option<&str> {
        self.interner.resolve(token.id)
    }
}

/// Owns one source buffer, its cursor and its intern table.
///
/// Tokens come out of `next_token` until it returns `Ok(None)`. The first
/// `LexError` is terminal: every later call returns the same error.
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    source: Vec<u8>,
    cursor: usize,
    interner: Interner,
    failed: Option<LexError>,
}

/// Bytes map one-to-one onto U+0000..=U+00FF.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton, source: impl Into<Vec<u8>>) -> Self {
        Self {
            automaton,
            source: source.into(),
            cursor: 0,
            interner: Interner::new(),
            failed: None,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        let res = self.scan();
        if let Err(err) = res {
            self.failed = Some(err);
        }
        res
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        let mut state = START_STATE;
        let mut start = self.cursor;
        let mut accepted: Option<Accepted> = None;
        let mut dead_end = false;

        while let Some(&b) = self.source.get(self.cursor) {
            let Ok(next) = self.automaton.next_state(state, b) else {
                dead_end = true;
                break;
            };
            self.cursor += 1;
            state = next;

            // Back at the start state: whatever was consumed (whitespace,
            // a finished comment) is dropped along with any pending match.
            if state == START_STATE {
                start = self.cursor;
                accepted = None;
                continue;
            }

            if let Ok(category) = self.automaton.classify(state) {
                accepted = Some(Accepted {
                    end: self.cursor,
                    category,
                });
            }
        }

        let Some(Accepted { end, category }) = accepted else {
            if !dead_end && state == START_STATE {
                return Ok(None);
            }
            return Err(LexError {
                position: self.cursor,
            });
        };

        // Give back everything consumed after the last accepting state.
        self.cursor = end;
        let text = latin1(&self.source[start..end]);
        let category = reclassify(category, &text);
        let id = self.interner.intern(&text);
        log::trace!("{category} {text:?} @ {start}..{end}");
        Ok(Some(Token::new(id, category)))
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Byte offset of the next unconsumed byte.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Text of an interned lexeme.
    pub fn lexeme(&self, id: TokenId) -> Option<&str> {
        self.interner.resolve(id)
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }

    /// Scans the rest of the buffer, stopping at the first error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.by_ref().collect()
    }

    /// Consumes the scanner, keeping the tokens produced before any error.
    pub fn run(mut self) -> ScanOutput {
        let mut tokens = Vec::new();
        let error = loop {
            match self.next_token() {
                Ok(Some(tok)) => tokens.push(tok),
                Ok(None) => break None,
                Err(err) => break Some(err),
            }
        };
        ScanOutput {
            tokens,
            interner: self.interner,
            error,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields the first error once, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed.is_some() {
            return None;
        }
        self.next_token().transpose()
    }
}
