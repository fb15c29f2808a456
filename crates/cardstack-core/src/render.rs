//! Render variant selection and correlation keys.
//!
//! The renderer is pure: given the cards and the selection it decides which
//! representation each card uses. Elements that should morph between the
//! two representations carry a [`CorrelationKey`] that depends only on the
//! card id and the element role.

use std::fmt;

use crate::card::{Card, CardId};
use crate::selection::SelectionController;

// =============================================================================
// Element Roles
// =============================================================================

/// A logical element shared between the two card representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Image,
    Title,
    Body,
    Background,
}

impl ElementRole {
    pub const ALL: [ElementRole; 4] = [
        ElementRole::Image,
        ElementRole::Title,
        ElementRole::Body,
        ElementRole::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementRole::Image => "image",
            ElementRole::Title => "title",
            ElementRole::Body => "text",
            ElementRole::Background => "background",
        }
    }
}

// =============================================================================
// Correlation Key
// =============================================================================

/// Identifies "the same" element across both renderings of one card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationKey(String);

impl CorrelationKey {
    pub fn new(id: CardId, role: ElementRole) -> Self {
        Self(format!("{}-{}", role.as_str(), id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CorrelationKey> for String {
    fn from(key: CorrelationKey) -> Self {
        key.0
    }
}

// =============================================================================
// Render Variant
// =============================================================================

/// Which representation a card renders with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderVariant<'a> {
    Collapsed(&'a Card),
    Expanded(&'a Card),
}

impl<'a> RenderVariant<'a> {
    pub fn card(&self) -> &'a Card {
        match self {
            RenderVariant::Collapsed(card) | RenderVariant::Expanded(card) => card,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, RenderVariant::Expanded(_))
    }

    /// Correlation key for one of this card's elements.
    ///
    /// Identical for the collapsed and expanded variant of the same card.
    /// `role` must be one of [`roles`](Self::roles) for this variant.
    pub fn key(&self, role: ElementRole) -> CorrelationKey {
        debug_assert!(
            self.roles().contains(&role),
            "{role:?} is not rendered by {self:?}"
        );
        CorrelationKey::new(self.card().id, role)
    }

    /// Roles present in this representation.
    ///
    /// The body text only exists while expanded.
    pub fn roles(&self) -> &'static [ElementRole] {
        match self {
            RenderVariant::Collapsed(_) => &[
                ElementRole::Image,
                ElementRole::Title,
                ElementRole::Background,
            ],
            RenderVariant::Expanded(_) => &ElementRole::ALL,
        }
    }
}

/// Pick the representation for one card.
pub fn render_card<'a>(card: &'a Card, selection: &SelectionController) -> RenderVariant<'a> {
    if selection.is_expanded(card.id) {
        RenderVariant::Expanded(card)
    } else {
        RenderVariant::Collapsed(card)
    }
}

/// Pick representations for every card, in collection order.
pub fn render_list<'a>(
    cards: &'a [Card],
    selection: &SelectionController,
) -> Vec<RenderVariant<'a>> {
    cards
        .iter()
        .map(|card| render_card(card, selection))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardFactory;
    use std::collections::HashSet;

    fn expanded_count(variants: &[RenderVariant<'_>]) -> usize {
        variants.iter().filter(|v| v.is_expanded()).count()
    }

    #[test]
    fn test_initial_render_all_collapsed() {
        let cards = CardFactory::default().build_seeded(3);
        let selection = SelectionController::new(&cards);
        let variants = render_list(&cards, &selection);

        assert_eq!(variants.len(), cards.len());
        assert_eq!(expanded_count(&variants), 0);
    }

    #[test]
    fn test_each_card_expands_alone() {
        let cards = CardFactory::default().build_seeded(3);
        let mut selection = SelectionController::new(&cards);

        for (i, card) in cards.iter().enumerate() {
            selection.select(Some(card.id));
            let variants = render_list(&cards, &selection);
            assert_eq!(expanded_count(&variants), 1);
            assert!(variants[i].is_expanded());
            assert_eq!(variants[i].card().id, card.id);
        }
    }

    #[test]
    fn test_render_preserves_order() {
        let cards = CardFactory::default().build_seeded(3);
        let mut selection = SelectionController::new(&cards);
        selection.select(Some(cards[5].id));

        let ids: Vec<_> = render_list(&cards, &selection)
            .iter()
            .map(|v| v.card().id)
            .collect();
        let expected: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_switching_never_shows_two_expanded() {
        let cards = CardFactory::default().build_seeded(3);
        let mut selection = SelectionController::new(&cards);

        selection.select(Some(cards[0].id));
        assert_eq!(expanded_count(&render_list(&cards, &selection)), 1);

        selection.select(Some(cards[7].id));
        let variants = render_list(&cards, &selection);
        assert_eq!(expanded_count(&variants), 1);
        assert!(variants[7].is_expanded());
        assert!(!variants[0].is_expanded());
    }

    #[test]
    fn test_keys_stable_across_variants() {
        let cards = CardFactory::default().build_seeded(3);
        let card = &cards[2];
        let collapsed = RenderVariant::Collapsed(card);
        let expanded = RenderVariant::Expanded(card);

        for &role in collapsed.roles() {
            assert_eq!(collapsed.key(role), expanded.key(role));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not rendered by")]
    fn test_key_for_missing_role_asserts_in_debug() {
        let cards = CardFactory::default().build_seeded(3);
        RenderVariant::Collapsed(&cards[0]).key(ElementRole::Body);
    }

    #[test]
    fn test_keys_distinct_across_roles_and_cards() {
        let cards = CardFactory::default().build_seeded(3);
        let keys: HashSet<_> = cards
            .iter()
            .flat_map(|c| ElementRole::ALL.map(|role| CorrelationKey::new(c.id, role)))
            .collect();
        assert_eq!(keys.len(), cards.len() * ElementRole::ALL.len());
    }

    #[test]
    fn test_key_format() {
        let cards = CardFactory::default().build_seeded(3);
        let key = CorrelationKey::new(cards[0].id, ElementRole::Image);
        assert_eq!(key.as_str(), format!("image-{}", cards[0].id));
    }

    #[test]
    fn test_roles_per_variant() {
        let cards = CardFactory::default().build_seeded(3);
        let collapsed = RenderVariant::Collapsed(&cards[0]);
        let expanded = RenderVariant::Expanded(&cards[0]);

        assert!(!collapsed.roles().contains(&ElementRole::Body));
        assert!(expanded.roles().contains(&ElementRole::Body));
        assert_eq!(expanded.roles().len(), 4);
    }
}
