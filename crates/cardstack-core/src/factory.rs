//! Placeholder card generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card::{Card, Rgb};
use crate::error::ConfigError;

/// Default number of cards in the list.
pub const DEFAULT_CARD_COUNT: usize = 20;

/// Default lower bound for each color channel.
///
/// Keeps fills away from near-black so text stays legible.
pub const DEFAULT_CHANNEL_FLOOR: f32 = 0.3;

/// Default number of distinct image assets cycled through.
pub const DEFAULT_IMAGE_VARIANTS: usize = 5;

/// Inclusive range a single color channel is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    low: f32,
    high: f32,
}

impl ChannelRange {
    /// Create a range, requiring `0.0 <= low <= high <= 1.0`.
    ///
    /// Errors name the config keys the bounds are read from.
    pub fn new(low: f32, high: f32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&low) {
            return Err(ConfigError::Invalid {
                field: "cards.channel_floor",
                reason: format!("must lie in 0.0..=1.0, got {low}"),
            });
        }
        if !(0.0..=1.0).contains(&high) {
            return Err(ConfigError::Invalid {
                field: "cards.channel_ceiling",
                reason: format!("must lie in 0.0..=1.0, got {high}"),
            });
        }
        if low > high {
            return Err(ConfigError::Invalid {
                field: "cards.channel_floor",
                reason: format!("floor {low} exceeds ceiling {high}"),
            });
        }
        Ok(Self { low, high })
    }

    /// Check whether a channel value lies in this range.
    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    fn sample(&self, rng: &mut impl Rng) -> f32 {
        rng.gen_range(self.low..=self.high)
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_CHANNEL_FLOOR,
            high: 1.0,
        }
    }
}

/// Builds the fixed, ordered card collection shown by the list.
#[derive(Debug, Clone)]
pub struct CardFactory {
    count: usize,
    channel_range: ChannelRange,
    image_variants: usize,
}

impl Default for CardFactory {
    fn default() -> Self {
        Self {
            count: DEFAULT_CARD_COUNT,
            channel_range: ChannelRange::default(),
            image_variants: DEFAULT_IMAGE_VARIANTS,
        }
    }
}

impl CardFactory {
    /// Create a factory. `image_variants` is clamped to at least 1.
    pub fn new(count: usize, channel_range: ChannelRange, image_variants: usize) -> Self {
        Self {
            count,
            channel_range,
            image_variants: image_variants.max(1),
        }
    }

    /// Build the cards, drawing colors from `rng`.
    ///
    /// Card `i` (1-based) gets title `Title {i}` and image `{i % variants}`.
    pub fn build(&self, rng: &mut impl Rng) -> Vec<Card> {
        let cards: Vec<Card> = (1..=self.count)
            .map(|index| {
                Card::new(
                    self.random_color(rng),
                    format!("Title {index}"),
                    (index % self.image_variants).to_string(),
                    format!(
                        "This is the detailed description for card number {index}. \
                         Here you can add more information about the card"
                    ),
                )
            })
            .collect();

        tracing::debug!("Built {} cards", cards.len());
        cards
    }

    /// Build with a fixed seed. Colors are reproducible; ids are not.
    pub fn build_seeded(&self, seed: u64) -> Vec<Card> {
        self.build(&mut StdRng::seed_from_u64(seed))
    }

    /// Build with an entropy-seeded generator.
    pub fn build_random(&self) -> Vec<Card> {
        self.build(&mut StdRng::from_entropy())
    }

    fn random_color(&self, rng: &mut impl Rng) -> Rgb {
        Rgb::new(
            self.channel_range.sample(rng),
            self.channel_range.sample(rng),
            self.channel_range.sample(rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_factory() {
        let cards = CardFactory::default().build_seeded(1);
        assert_eq!(cards.len(), 20);
        assert_eq!(cards[0].title, "Title 1");
        assert_eq!(cards[19].title, "Title 20");
    }

    #[test]
    fn test_image_names_cycle() {
        let cards = CardFactory::default().build_seeded(1);
        let images: Vec<_> = cards.iter().take(6).map(|c| c.image.name()).collect();
        assert_eq!(images, vec!["1", "2", "3", "4", "0", "1"]);
    }

    #[test]
    fn test_full_text_mentions_index() {
        let cards = CardFactory::default().build_seeded(1);
        assert_eq!(
            cards[6].full_text,
            "This is the detailed description for card number 7. \
             Here you can add more information about the card"
        );
    }

    #[test]
    fn test_seeded_colors_are_reproducible() {
        let factory = CardFactory::default();
        let a = factory.build_seeded(42);
        let b = factory.build_seeded(42);

        let colors_a: Vec<_> = a.iter().map(|c| c.color).collect();
        let colors_b: Vec<_> = b.iter().map(|c| c.color).collect();
        assert_eq!(colors_a, colors_b);

        // Identity is per-build
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn test_zero_cards() {
        let factory = CardFactory::new(0, ChannelRange::default(), 5);
        assert!(factory.build_random().is_empty());
    }

    #[test]
    fn test_zero_image_variants_clamped() {
        let factory = CardFactory::new(3, ChannelRange::default(), 0);
        let cards = factory.build_seeded(0);
        assert!(cards.iter().all(|c| c.image.name() == "0"));
    }

    #[test]
    fn test_channel_range_validation() {
        assert!(ChannelRange::new(0.3, 1.0).is_ok());
        assert!(ChannelRange::new(0.5, 0.5).is_ok());
        assert!(ChannelRange::new(0.8, 0.2).is_err());
        assert!(ChannelRange::new(-0.1, 1.0).is_err());
        assert!(ChannelRange::new(0.0, 1.5).is_err());
        assert!(ChannelRange::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_channel_range_errors_name_config_keys() {
        let field = |result: Result<ChannelRange, ConfigError>| match result {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected invalid range, got {other:?}"),
        };

        assert_eq!(field(ChannelRange::new(-0.1, 1.0)), "cards.channel_floor");
        assert_eq!(field(ChannelRange::new(0.3, 1.5)), "cards.channel_ceiling");
        assert_eq!(field(ChannelRange::new(0.9, 0.1)), "cards.channel_floor");
    }

    proptest! {
        #[test]
        fn prop_count_and_distinct_ids(count in 0usize..200, seed in any::<u64>()) {
            let factory = CardFactory::new(count, ChannelRange::default(), 5);
            let cards = factory.build_seeded(seed);
            prop_assert_eq!(cards.len(), count);

            let ids: HashSet<_> = cards.iter().map(|c| c.id).collect();
            prop_assert_eq!(ids.len(), count);
        }

        #[test]
        fn prop_channels_within_range(
            low in 0.0f32..=1.0,
            span in 0.0f32..=1.0,
            seed in any::<u64>(),
        ) {
            let high = (low + span).min(1.0);
            let range = ChannelRange::new(low, high).unwrap();
            let cards = CardFactory::new(32, range, 5).build_seeded(seed);

            for card in &cards {
                for channel in card.color.channels() {
                    prop_assert!(range.contains(channel), "{} outside {:?}", channel, range);
                }
            }
        }
    }
}
