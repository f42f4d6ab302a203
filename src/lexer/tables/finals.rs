// src/lexer/tables/finals.rs

use serde::{Deserialize, Serialize};

use super::{StateId, tokens::TokenCategory};
use crate::lexer::error::SpecError;

/// Accepting states, grouped by the category they accept.
///
/// The sets must be disjoint; `Automaton` construction rejects a state that
/// appears in more than one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalStates {
    pub identifier: Vec<StateId>,
    pub integer_literal: Vec<StateId>,
    pub floating_point_literal: Vec<StateId>,
    pub character_literal: Vec<StateId>,
    pub string_literal: Vec<StateId>,
    pub operator: Vec<StateId>,
    pub separator: Vec<StateId>,
}

impl FinalStates {
    /// Classification that goes with the reference Java rule file.
    pub fn java() -> Self {
        Self {
            identifier: vec![57, 58],
            integer_literal: vec![1, 4, 6, 7, 20, 21, 23, 24, 25, 27, 39, 42, 59, 65],
            floating_point_literal: vec![2, 14, 15, 17, 28, 29, 30, 32, 35, 37, 38, 40],
            character_literal: vec![66],
            string_literal: vec![67],
            operator: vec![53, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 80],
            separator: vec![79],
        }
    }

    /// Adds `states` to the set for `category`. Reclassified categories
    /// (keyword, null, boolean) have no automaton states and are ignored.
    pub fn with(
        mut self,
        category: TokenCategory,
        states: impl IntoIterator<Item = StateId>,
    ) -> Self {
        match self.slot_mut(category) {
            Some(slot) => slot.extend(states),
            None => log::warn!("{category} is not an automaton category; states ignored"),
        }
        self
    }

    fn slot_mut(&mut self, category: TokenCategory) -> Option<&mut Vec<StateId>> {
        use TokenCategory::*;
        Some(match category {
            Identifier => &mut self.identifier,
            IntegerLiteral => &mut self.integer_literal,
            FloatingPointLiteral => &mut self.floating_point_literal,
            CharacterLiteral => &mut self.character_literal,
            StringLiteral => &mut self.string_literal,
            Operator => &mut self.operator,
            Separator => &mut self.separator,
            Keyword | NullLiteral | BooleanLiteral => return None,
        })
    }

    pub fn sets(&self) -> [(TokenCategory, &[StateId]); 7] {
        use TokenCategory::*;
        [
            (Identifier, self.identifier.as_slice()),
            (IntegerLiteral, self.integer_literal.as_slice()),
            (FloatingPointLiteral, self.floating_point_literal.as_slice()),
            (CharacterLiteral, self.character_literal.as_slice()),
            (StringLiteral, self.string_literal.as_slice()),
            (Operator, self.operator.as_slice()),
            (Separator, self.separator.as_slice()),
        ]
    }

    pub fn max_state(&self) -> Option<StateId> {
        self.sets()
            .into_iter()
            .flat_map(|(_, states)| states.iter().copied())
            .max()
    }

    /// Per-state category lookup covering `n_states` states. Fails on a
    /// state claimed by two categories.
    pub(crate) fn category_table(
        &self,
        n_states: usize,
    ) -> Result<Vec<Option<TokenCategory>>, SpecError> {
        let mut table = vec![None; n_states];
        for (category, states) in self.sets() {
            for &s in states {
                let slot = &mut table[s as usize];
                if let Some(first) = *slot {
                    if first != category {
                        return Err(SpecError::OverlappingFinalState {
                            state: s,
                            first,
                            second: category,
                        });
                    }
                }
                *slot = Some(category);
            }
        }
        Ok(table)
    }
}
