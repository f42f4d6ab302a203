// src/lexer/tables/tokens.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexer::intern::TokenId;

/// Token categories. The first seven come straight out of the automaton's
/// final-state classification; the last three only appear after an
/// identifier-shaped lexeme has been reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    Identifier,
    IntegerLiteral,
    FloatingPointLiteral,
    CharacterLiteral,
    StringLiteral,
    Operator,
    Separator,

    // reclassified identifiers
    Keyword,
    NullLiteral,
    BooleanLiteral,
}

impl TokenCategory {
    pub fn as_str(self) -> &'static str {
        use TokenCategory::*;
        match self {
            Identifier => "IDENTIFIER",
            IntegerLiteral => "INTEGER_LITERAL",
            FloatingPointLiteral => "FLOATING_POINT_LITERAL",
            CharacterLiteral => "CHARACTER_LITERAL",
            StringLiteral => "STRING_LITERAL",
            Operator => "OPERATOR",
            Separator => "SEPARATOR",
            Keyword => "KEYWORD",
            NullLiteral => "NULL_LITERAL",
            BooleanLiteral => "BOOLEAN_LITERAL",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned token: the interned lexeme id plus its final category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub category: TokenCategory,
}

impl Token {
    pub fn new(id: TokenId, category: TokenCategory) -> Self {
        Self { id, category }
    }
}

pub const KEYWORDS: [&str; 50] = [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "if",
    "goto",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
];

pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];
pub const NULL_LITERAL: &str = "null";

#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

#[inline]
pub fn is_boolean_literal(text: &str) -> bool {
    BOOLEAN_LITERALS.contains(&text)
}

#[inline]
pub fn is_null_literal(text: &str) -> bool {
    text == NULL_LITERAL
}

/// Identifier-shaped lexemes are checked against the keyword table first,
/// then `null`, then the boolean names. Every other category passes through.
pub fn reclassify(category: TokenCategory, text: &str) -> TokenCategory {
    if category != TokenCategory::Identifier {
        return category;
    }
    if is_keyword(text) {
        TokenCategory::Keyword
    } else if is_null_literal(text) {
        TokenCategory::NullLiteral
    } else if is_boolean_literal(text) {
        TokenCategory::BooleanLiteral
    } else {
        TokenCategory::Identifier
    }
}
