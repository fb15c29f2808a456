//! UI state model for the card list.
//!
//! These types are GPUI-independent to enable testing and clear separation.

use cardstack_core::{
    render_list, Card, CardId, ExpansionPhase, RenderVariant, SelectionController,
};

// =============================================================================
// Card List State
// =============================================================================

/// Everything the card list panel renders from.
///
/// Owns the card collection and the selection controller. Tap handlers are
/// the only mutators.
#[derive(Debug)]
pub struct CardListState {
    cards: Vec<Card>,
    selection: SelectionController,
    /// Bumped on every selection change so transitions restart.
    generation: u64,
    /// Selection before the most recent change.
    previous: Option<CardId>,
}

impl CardListState {
    /// Create an all-collapsed state over `cards`.
    pub fn new(cards: Vec<Card>) -> Self {
        let selection = SelectionController::new(&cards);
        Self {
            cards,
            selection,
            generation: 0,
            previous: None,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> ExpansionPhase {
        self.selection.phase()
    }

    /// Transition generation, used to key animations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this card changed representation in the most recent change.
    pub fn is_transitioning(&self, id: CardId) -> bool {
        self.generation > 0 && (self.previous == Some(id) || self.selection.is_expanded(id))
    }

    /// Current render variants in collection order.
    pub fn variants(&self) -> Vec<RenderVariant<'_>> {
        render_list(&self.cards, &self.selection)
    }

    // -------------------------------------------------------------------------
    // Tap Handlers
    // -------------------------------------------------------------------------

    /// Tap on a collapsed card. Returns whether the selection changed.
    pub fn tap_collapsed(&mut self, id: CardId) -> bool {
        self.apply(Some(id))
    }

    /// Tap on the expanded card's close button.
    pub fn tap_dismiss(&mut self) -> bool {
        self.apply(None)
    }

    fn apply(&mut self, id: Option<CardId>) -> bool {
        if self.selection.selected() == id {
            return false;
        }
        self.previous = self.selection.selected();
        self.selection.select(id);
        self.generation += 1;
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_core::CardFactory;
    use proptest::prelude::*;

    fn test_state() -> CardListState {
        CardListState::new(CardFactory::default().build_seeded(11))
    }

    /// Positions of the cards currently rendered expanded.
    fn expanded_indices(state: &CardListState) -> Vec<usize> {
        state
            .variants()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_expanded())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = test_state();
        assert_eq!(state.cards().len(), 20);
        assert_eq!(state.phase(), ExpansionPhase::Collapsed);
        assert_eq!(state.generation(), 0);
        assert!(expanded_indices(&state).is_empty());
        assert!(state.variants().iter().all(|v| !v.is_expanded()));
    }

    #[test]
    fn test_tap_expand_and_dismiss() {
        let mut state = test_state();
        let id = state.cards()[4].id;

        assert!(state.tap_collapsed(id));
        assert_eq!(state.phase(), ExpansionPhase::Expanded(id));
        assert_eq!(expanded_indices(&state), vec![4]);
        assert_eq!(state.generation(), 1);

        assert!(state.tap_dismiss());
        assert_eq!(state.phase(), ExpansionPhase::Collapsed);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_dismiss_when_collapsed_is_noop() {
        let mut state = test_state();
        assert!(!state.tap_dismiss());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_retap_same_card_is_noop() {
        let mut state = test_state();
        let id = state.cards()[0].id;
        state.tap_collapsed(id);
        assert!(!state.tap_collapsed(id));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_tap_other_card_switches_directly() {
        let mut state = test_state();
        let first = state.cards()[1].id;
        let second = state.cards()[9].id;

        state.tap_collapsed(first);
        state.tap_collapsed(second);

        assert_eq!(expanded_indices(&state), vec![9]);
    }

    #[test]
    fn test_transitioning_cards() {
        let mut state = test_state();
        let first = state.cards()[1].id;
        let second = state.cards()[2].id;
        let bystander = state.cards()[3].id;
        assert!(!state.is_transitioning(first));

        state.tap_collapsed(first);
        assert!(state.is_transitioning(first));
        assert!(!state.is_transitioning(second));

        state.tap_collapsed(second);
        assert!(state.is_transitioning(first));
        assert!(state.is_transitioning(second));
        assert!(!state.is_transitioning(bystander));

        state.tap_dismiss();
        assert!(state.is_transitioning(second));
        assert!(!state.is_transitioning(first));
    }

    proptest! {
        /// `Some(i)` taps collapsed card `i`, `None` taps the close button.
        #[test]
        fn prop_at_most_one_expanded(
            taps in prop::collection::vec(prop::option::of(0usize..20), 0..64),
        ) {
            let mut state = test_state();

            for tap in taps {
                match tap {
                    Some(i) => {
                        let id = state.cards()[i].id;
                        state.tap_collapsed(id);
                        prop_assert_eq!(state.phase(), ExpansionPhase::Expanded(id));
                    }
                    None => {
                        state.tap_dismiss();
                        prop_assert_eq!(state.phase(), ExpansionPhase::Collapsed);
                    }
                }

                let expanded = expanded_indices(&state);
                prop_assert!(expanded.len() <= 1, "expanded: {:?}", expanded);
                prop_assert_eq!(expanded.first().copied(), tap);
            }
        }
    }
}
