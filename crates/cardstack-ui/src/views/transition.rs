//! Expand/collapse transition parameters.

use std::time::Duration;

use gpui::{ease_in_out, Animation, ElementId, Pixels, SharedString};

use cardstack_core::CorrelationKey;

/// A running transition for one card.
///
/// Animation ids combine the element's correlation key with the selection
/// generation, so each selection change restarts the animation while the
/// element itself keeps its identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub generation: u64,
    pub duration: Duration,
}

impl Transition {
    pub fn animation(&self) -> Animation {
        Animation::new(self.duration).with_easing(ease_in_out)
    }

    pub fn animation_id(&self, key: &CorrelationKey) -> ElementId {
        ElementId::Name(SharedString::from(format!(
            "{}-t{}",
            key.as_str(),
            self.generation
        )))
    }
}

/// Map a correlation key to a GPUI element id.
pub fn element_id(key: &CorrelationKey) -> ElementId {
    ElementId::Name(SharedString::from(key.to_string()))
}

/// Linear interpolation between two lengths.
pub fn lerp(from: Pixels, to: Pixels, delta: f32) -> Pixels {
    let from: f32 = from.into();
    let to: f32 = to.into();
    gpui::px(from + (to - from) * delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_core::{CardId, ElementRole};
    use gpui::px;

    #[test]
    fn test_animation_id_changes_with_generation() {
        let key = CorrelationKey::new(CardId::new(), ElementRole::Image);
        let a = Transition {
            generation: 1,
            duration: Duration::from_millis(100),
        };
        let b = Transition {
            generation: 2,
            ..a
        };
        assert_ne!(a.animation_id(&key), b.animation_id(&key));
        assert_eq!(a.animation_id(&key), a.animation_id(&key));
    }

    #[test]
    fn test_element_id_from_key() {
        let id = CardId::new();
        let key = CorrelationKey::new(id, ElementRole::Title);
        assert_eq!(
            element_id(&key),
            ElementId::Name(SharedString::from(format!("title-{id}")))
        );
    }

    #[test]
    fn test_lerp() {
        let mid: f32 = lerp(px(60.0), px(300.0), 0.5).into();
        assert!((mid - 180.0).abs() < 0.001);
        let start: f32 = lerp(px(60.0), px(300.0), 0.0).into();
        assert!((start - 60.0).abs() < 0.001);
    }
}
