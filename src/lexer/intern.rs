// src/lexer/intern.rs
use hashbrown::HashMap;

/// Index of an interned lexeme.
pub type TokenId = u32;

/// Lexeme text to id, assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    ids: HashMap<Box<str>, TokenId>,
    texts: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing id for `text`, or assigns the next one.
    pub fn intern(&mut self, text: &str) -> TokenId {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = self.texts.len() as TokenId;
        self.texts.push(text.into());
        self.ids.insert(text.into(), id);
        id
    }

    pub fn get(&self, text: &str) -> Option<TokenId> {
        self.ids.get(text).copied()
    }

    pub fn resolve(&self, id: TokenId) -> Option<&str> {
        self.texts.get(id as usize).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// `(id, text)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.texts
            .iter()
            .enumerate()
            .map(|(i, s)| (i as TokenId, &**s))
    }
}
