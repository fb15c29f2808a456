//! Card and color types.

use std::fmt;
use uuid::Uuid;

/// Stable card identifier.
///
/// Assigned once at creation and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(Uuid);

impl CardId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in r, g, b order.
    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Reference to a static image asset by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A card is the atomic unit of data in the list.
///
/// Cards are built once by [`CardFactory`](crate::CardFactory) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Unique identifier within the collection.
    pub id: CardId,

    /// Background fill.
    pub color: Rgb,

    /// Short label shown in both renderings.
    pub title: String,

    /// Image shown in both renderings.
    pub image: ImageRef,

    /// Detail text, shown only when expanded.
    pub full_text: String,
}

impl Card {
    /// Create a card with a fresh identifier.
    pub fn new(
        color: Rgb,
        title: impl Into<String>,
        image: impl Into<ImageRef>,
        full_text: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(),
            color,
            title: title.into(),
            image: image.into(),
            full_text: full_text.into(),
        }
    }

    /// Title as shown in the collapsed row.
    pub fn collapsed_title(&self) -> String {
        format!("{}...", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_unique() {
        let a = CardId::new();
        let b = CardId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_id_display_matches_uuid() {
        let id = CardId::new();
        let parsed = Uuid::parse_str(&id.to_string()).expect("card id should display as a uuid");
        assert_eq!(CardId(parsed), id);
    }

    #[test]
    fn test_collapsed_title() {
        let card = Card::new(Rgb::new(0.5, 0.5, 0.5), "Title 3", "3", "body");
        assert_eq!(card.collapsed_title(), "Title 3...");
        assert_eq!(card.image.name(), "3");
    }
}
