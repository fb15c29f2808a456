//! Expansion state for the card list.

use std::collections::HashSet;

use crate::card::{Card, CardId};

/// Which card, if any, is expanded. Invalid states (two expanded) are
/// unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionPhase {
    /// Every card renders collapsed.
    #[default]
    Collapsed,
    /// Exactly this card renders expanded.
    Expanded(CardId),
}

/// Owns the single selection slot for the list.
///
/// Passed by reference to the renderer and mutated only by tap handlers.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<CardId>,
    known: HashSet<CardId>,
}

impl SelectionController {
    /// Create a controller for the given collection, initially collapsed.
    pub fn new(cards: &[Card]) -> Self {
        Self {
            selected: None,
            known: cards.iter().map(|c| c.id).collect(),
        }
    }

    /// Replace the selection.
    ///
    /// Selecting an id outside the collection is a caller bug; it is only
    /// checked in debug builds.
    pub fn select(&mut self, id: Option<CardId>) {
        debug_assert!(
            id.map_or(true, |id| self.known.contains(&id)),
            "selected card {id:?} is not in the collection"
        );

        if self.selected != id {
            tracing::debug!("Selection {:?} -> {:?}", self.selected, id);
        }
        self.selected = id;
    }

    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    pub fn is_expanded(&self, id: CardId) -> bool {
        self.selected == Some(id)
    }

    pub fn phase(&self) -> ExpansionPhase {
        match self.selected {
            Some(id) => ExpansionPhase::Expanded(id),
            None => ExpansionPhase::Collapsed,
        }
    }
}
