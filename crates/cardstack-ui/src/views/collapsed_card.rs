//! Collapsed list-row representation of a card.

use std::path::PathBuf;

use gpui::{
    div, prelude::*, AnimationExt, App, ClickEvent, FontWeight, IntoElement, Window,
};
use gpui_component::h_flex;

use cardstack_core::{Card, ElementRole, RenderVariant};

use crate::theme::ThemeExt;
use crate::views::card_image::card_image;
use crate::views::transition::{element_id, Transition};

type TapHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A card row: thumbnail and truncated title on the card color.
///
/// Tapping anywhere on the row requests expansion.
#[derive(IntoElement)]
pub struct CollapsedCard {
    card: Card,
    assets_dir: Option<PathBuf>,
    transition: Option<Transition>,
    on_tap: TapHandler,
}

impl CollapsedCard {
    pub fn new(
        card: Card,
        assets_dir: Option<PathBuf>,
        on_tap: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            card,
            assets_dir,
            transition: None,
            on_tap: Box::new(on_tap),
        }
    }

    /// Animate into place, used for the card that was just collapsed.
    pub fn transition(mut self, transition: Option<Transition>) -> Self {
        self.transition = transition;
        self
    }
}

impl RenderOnce for CollapsedCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme().clone();
        let variant = RenderVariant::Collapsed(&self.card);
        let background_key = variant.key(ElementRole::Background);
        let thumbnail = theme.thumbnail_size;

        let image = card_image(
            element_id(&variant.key(ElementRole::Image)),
            &self.card.image,
            self.assets_dir.as_deref(),
            theme.thumbnail_radius,
            &theme,
        )
        .size(thumbnail);

        let title = div()
            .id(element_id(&variant.key(ElementRole::Title)))
            .text_size(theme.font_size_headline)
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.collapsed_text)
            .child(self.card.collapsed_title());

        let on_tap = self.on_tap;
        let row = h_flex()
            .id(element_id(&background_key))
            .w_full()
            .gap(theme.row_gap)
            .p(theme.card_padding)
            .bg(theme.card_fill(self.card.color))
            .rounded(theme.card_radius)
            .cursor_pointer()
            .on_click(move |event, window, cx| on_tap(event, window, cx))
            .child(image)
            .child(title)
            .child(div().flex_1());

        let row = match self.transition {
            Some(transition) => row
                .with_animation(
                    transition.animation_id(&background_key),
                    transition.animation(),
                    |row, delta| row.opacity(0.5 + 0.5 * delta),
                )
                .into_any_element(),
            None => row.into_any_element(),
        };

        // Same outer inset as the expanded card
        div().w_full().px(theme.card_padding).child(row)
    }
}
