// src/lexer/tables/dfa.rs
use std::path::Path;

use anyhow::{Context, Result};

use super::{
    StateId,
    build::TableBuilder,
    finals::FinalStates,
    rules::{Rule, parse_rules},
    tokens::TokenCategory,
};
use crate::lexer::error::{AutomatonError, SpecError};

pub const START_STATE: StateId = 0;

/// Row entry meaning "no edge on this byte".
pub const NO_TRANSITION: StateId = StateId::MAX;

/// One dense row per state: `row[byte]` is the successor or `NO_TRANSITION`.
pub type Row = [StateId; 256];

pub(crate) const EMPTY_ROW: Row = [NO_TRANSITION; 256];

/// A built transition table plus its final-state classification.
///
/// Immutable once constructed; share it by reference (or `Arc`) between any
/// number of scanners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    rows: Vec<Row>,
    category_of: Vec<Option<TokenCategory>>,
    finals: FinalStates,
}

impl Automaton {
    /// Builds from rule-file text.
    pub fn from_spec_str(text: &str, finals: FinalStates) -> Result<Self, SpecError> {
        let rules = parse_rules(text)?;
        Self::from_rules(&rules, finals)
    }

    /// Applies `rules` in order (first definition of a (state, byte) pair wins).
    pub fn from_rules(rules: &[Rule], finals: FinalStates) -> Result<Self, SpecError> {
        let mut builder = TableBuilder::new();
        for rule in rules {
            builder.apply(rule);
        }
        builder.finish(finals)
    }

    pub fn from_path(path: impl AsRef<Path>, finals: FinalStates) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read rule file {}", path.display()))?;
        Self::from_spec_str(&text, finals)
            .with_context(|| format!("build automaton from {}", path.display()))
    }

    /// Pads `rows` so every classified state has a row, checks that every
    /// edge lands on a known state and that the final sets are disjoint.
    pub(crate) fn from_parts(mut rows: Vec<Row>, finals: FinalStates) -> Result<Self, SpecError> {
        if let Some(max) = finals.max_state() {
            let needed = max as usize + 1;
            if rows.len() < needed {
                rows.resize(needed, EMPTY_ROW);
            }
        }

        let last = rows.len().saturating_sub(1) as StateId;
        for (from, row) in rows.iter().enumerate() {
            if let Some(&to) = row
                .iter()
                .find(|&&to| to != NO_TRANSITION && to as usize >= rows.len())
            {
                return Err(SpecError::StateOutOfRange {
                    from: from as StateId,
                    to,
                    last,
                });
            }
        }

        let category_of = finals.category_table(rows.len())?;
        Ok(Self {
            rows,
            category_of,
            finals,
        })
    }

    /// Successor of `state` on `byte`.
    #[inline]
    pub fn next_state(&self, state: StateId, byte: u8) -> Result<StateId, AutomatonError> {
        match self.rows.get(state as usize).map(|row| row[byte as usize]) {
            Some(to) if to != NO_TRANSITION => Ok(to),
            _ => Err(AutomatonError::NoTransition { state, byte }),
        }
    }

    #[inline]
    pub fn is_final_state(&self, state: StateId) -> bool {
        self.classify(state).is_ok()
    }

    /// Category accepted at `state`.
    #[inline]
    pub fn classify(&self, state: StateId) -> Result<TokenCategory, AutomatonError> {
        self.category_of
            .get(state as usize)
            .copied()
            .flatten()
            .ok_or(AutomatonError::Unclassified { state })
    }

    /// Number of rows, i.e. one past the highest state number.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// Defined edges out of `state`, by ascending byte.
    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.rows
            .get(state as usize)
            .into_iter()
            .flat_map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &to)| to != NO_TRANSITION)
                    .map(|(b, &to)| (b as u8, to))
            })
    }

    pub fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&to| to != NO_TRANSITION).count())
            .sum()
    }

    pub fn final_states(&self) -> &FinalStates {
        &self.finals
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }
}
