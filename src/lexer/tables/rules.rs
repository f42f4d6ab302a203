// src/lexer/tables/rules.rs
// Parser for the plain-text rule file:
//   from to token [extra]
// one rule per line, fields separated by ASCII whitespace only (so NBSP and
// NEL stay usable as literal symbols). `#` starts a comment line.

use super::{
    StateId,
    charclass::{SEPARATORS, is_java_digit_like, is_java_letter, named_byte},
};
use crate::lexer::error::SpecError;

/// What a single rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// One literal or named byte.
    Byte(u8),
    /// `JL`
    Letter,
    /// `JD`
    DigitLike,
    /// `sep`
    Separator,
    /// `no X`: retract an existing `X` edge to the same target, otherwise
    /// add every byte except `X`.
    Exclude(u8),
    /// `no X` with X outside the byte range: nothing is excluded.
    AnyByte,
}

/// Field separators of the rule file: space, HT, LF, VT, FF, CR.
const FIELD_SEPARATORS: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

impl SymbolClass {
    /// Bytes this class stands for when it adds edges. For `Exclude` this is
    /// the complement of the excluded byte.
    pub fn bytes(self) -> impl Iterator<Item = u8> {
        (0u8..=255).filter(move |&b| match self {
            SymbolClass::Byte(x) => b == x,
            SymbolClass::Letter => is_java_letter(b),
            SymbolClass::DigitLike => is_java_digit_like(b),
            SymbolClass::Separator => SEPARATORS.contains(&b),
            SymbolClass::Exclude(x) => b != x,
            SymbolClass::AnyByte => true,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: StateId,
    pub to: StateId,
    pub symbol: SymbolClass,
}

impl Rule {
    pub fn new(from: StateId, to: StateId, symbol: SymbolClass) -> Self {
        Self { from, to, symbol }
    }
}

fn parse_state(line: usize, text: &str) -> Result<StateId, SpecError> {
    // StateId::MAX is the NO_TRANSITION sentinel.
    match text.parse::<StateId>() {
        Ok(state) if state != StateId::MAX => Ok(state),
        _ => Err(SpecError::BadState {
            line,
            text: text.to_string(),
        }),
    }
}

/// A single character stands for its own code point, which must fit a byte.
fn single_byte(token: &str) -> Option<Option<u8>> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(u8::try_from(u32::from(c)).ok())
}

fn parse_excluded(line: usize, name: &str) -> Result<SymbolClass, SpecError> {
    match single_byte(name) {
        Some(Some(b)) => Ok(SymbolClass::Exclude(b)),
        // Never equal to any byte, so every byte is added.
        Some(None) => Ok(SymbolClass::AnyByte),
        None => named_byte(name)
            .map(SymbolClass::Exclude)
            .ok_or_else(|| SpecError::UnknownSymbol {
                line,
                name: name.to_string(),
            }),
    }
}

/// Parses one line. Blank and comment lines yield `Ok(None)`, as do rule
/// tokens that name nothing this engine knows about.
pub fn parse_rule_line(line_no: usize, line: &str) -> Result<Option<Rule>, SpecError> {
    let fields: Vec<&str> = line
        .split(FIELD_SEPARATORS)
        .filter(|f| !f.is_empty())
        .collect();
    if fields.is_empty() || fields[0].starts_with('#') {
        return Ok(None);
    }
    if fields.len() < 3 {
        return Err(SpecError::MissingField {
            line: line_no,
            found: fields.len(),
        });
    }

    let from = parse_state(line_no, fields[0])?;
    let to = parse_state(line_no, fields[1])?;
    let token = fields[2];

    let symbol = match single_byte(token) {
        Some(Some(b)) => SymbolClass::Byte(b),
        Some(None) => {
            log::warn!("line {line_no}: `{token}` is outside the byte range; rule ignored");
            return Ok(None);
        }
        None => match token {
            "JL" => SymbolClass::Letter,
            "JD" => SymbolClass::DigitLike,
            "sep" => SymbolClass::Separator,
            "no" => {
                let excluded = fields
                    .get(3)
                    .ok_or(SpecError::MissingExclusion { line: line_no })?;
                parse_excluded(line_no, excluded)?
            }
            named => match named_byte(named) {
                Some(b) => SymbolClass::Byte(b),
                None => {
                    log::warn!("line {line_no}: unknown rule token `{named}`; rule ignored");
                    return Ok(None);
                }
            },
        },
    };

    Ok(Some(Rule::new(from, to, symbol)))
}

/// Parses a whole rule file, keeping file order.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, SpecError> {
    let mut rules = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(rule) = parse_rule_line(i + 1, line)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}
