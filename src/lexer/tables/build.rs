// src/lexer/tables/build.rs
use super::{
    StateId,
    dfa::{Automaton, EMPTY_ROW, NO_TRANSITION, Row},
    finals::FinalStates,
    rules::{Rule, SymbolClass},
};
use crate::lexer::error::SpecError;

/// Accumulates rules into dense rows. Rows are created on demand for the
/// source state only; `finish` pads the rest.
pub struct TableBuilder {
    rows: Vec<Row>,
    max_state: Option<StateId>,
    applied: usize,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            max_state: None,
            applied: 0,
        }
    }

    fn row_mut(&mut self, state: StateId) -> &mut Row {
        let idx = state as usize;
        if self.rows.len() <= idx {
            self.rows.resize(idx + 1, EMPTY_ROW);
        }
        &mut self.rows[idx]
    }

    /// Adds `from --byte--> to` unless `(from, byte)` already has an edge.
    pub fn add_transition(&mut self, from: StateId, to: StateId, byte: u8) {
        let slot = &mut self.row_mut(from)[byte as usize];
        if *slot == NO_TRANSITION {
            *slot = to;
        }
    }

    fn existing(&self, from: StateId, byte: u8) -> Option<StateId> {
        self.rows
            .get(from as usize)
            .map(|row| row[byte as usize])
            .filter(|&to| to != NO_TRANSITION)
    }

    pub fn apply(&mut self, rule: &Rule) {
        let Rule { from, to, symbol } = *rule;
        self.max_state = self.max_state.max(Some(from.max(to)));
        self.applied += 1;

        match symbol {
            // `no X` when X already leads to the same target takes that one
            // edge back out.
            SymbolClass::Exclude(x) if self.existing(from, x) == Some(to) => {
                self.rows[from as usize][x as usize] = NO_TRANSITION;
            }
            _ => {
                for b in symbol.bytes() {
                    self.add_transition(from, to, b);
                }
            }
        }
    }

    /// Pads the table up to the highest state named by any rule or final set
    /// and validates the result.
    pub fn finish(mut self, finals: FinalStates) -> Result<Automaton, SpecError> {
        let bound = self.max_state.max(finals.max_state());
        if let Some(max) = bound {
            self.row_mut(max);
        }

        let automaton = Automaton::from_parts(self.rows, finals)?;
        log::debug!(
            "[tables] built automaton: {} rules, {} states, {} edges",
            self.applied,
            automaton.state_count(),
            automaton.edge_count()
        );
        Ok(automaton)
    }
}
