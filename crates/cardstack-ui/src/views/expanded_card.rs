//! Expanded detail representation of a card.

use std::path::PathBuf;

use gpui::{
    div, prelude::*, AnimationExt, App, ClickEvent, ElementId, FontWeight, IntoElement,
    SharedString, Window,
};
use gpui_component::v_flex;

use cardstack_core::{Card, ElementRole, RenderVariant};

use crate::theme::ThemeExt;
use crate::views::card_image::card_image;
use crate::views::transition::{element_id, lerp, Transition};

type TapHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Close button glyph.
const CLOSE_GLYPH: &str = "✕";

/// A card in detail form: hero image with close button, title and body.
///
/// Only the close button collapses the card. Taps elsewhere are ignored.
#[derive(IntoElement)]
pub struct ExpandedCard {
    card: Card,
    assets_dir: Option<PathBuf>,
    transition: Option<Transition>,
    on_dismiss: TapHandler,
}

impl ExpandedCard {
    pub fn new(
        card: Card,
        assets_dir: Option<PathBuf>,
        on_dismiss: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            card,
            assets_dir,
            transition: None,
            on_dismiss: Box::new(on_dismiss),
        }
    }

    /// Animate the image, title and body in.
    pub fn transition(mut self, transition: Option<Transition>) -> Self {
        self.transition = transition;
        self
    }
}

impl RenderOnce for ExpandedCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme().clone();
        let variant = RenderVariant::Expanded(&self.card);
        let image_key = variant.key(ElementRole::Image);
        let title_key = variant.key(ElementRole::Title);
        let body_key = variant.key(ElementRole::Body);

        let hero_height = theme.hero_height;
        let thumbnail = theme.thumbnail_size;

        // Hero image
        let image = card_image(
            element_id(&image_key),
            &self.card.image,
            self.assets_dir.as_deref(),
            theme.thumbnail_radius,
            &theme,
        )
        .w_full()
        .h(hero_height)
        .shadow_md();

        let image = match self.transition {
            Some(transition) => div()
                .w_full()
                .p(theme.card_padding)
                .child(image.with_animation(
                    transition.animation_id(&image_key),
                    transition.animation(),
                    move |image, delta| image.h(lerp(thumbnail, hero_height, delta)),
                ))
                .into_any_element(),
            None => div()
                .w_full()
                .p(theme.card_padding)
                .child(image)
                .into_any_element(),
        };

        // Close button
        let on_dismiss = self.on_dismiss;
        let close_button = div()
            .id(ElementId::Name(SharedString::from(format!(
                "close-{}",
                self.card.id
            ))))
            .absolute()
            .top_0()
            .right_0()
            .p(theme.card_padding)
            .cursor_pointer()
            .text_size(theme.font_size_title)
            .text_color(theme.close_button)
            .child(CLOSE_GLYPH)
            .on_click(move |event, window, cx| on_dismiss(event, window, cx));

        let header = div().relative().w_full().child(image).child(close_button);

        let title = div()
            .id(element_id(&title_key))
            .px(theme.card_padding)
            .text_size(theme.font_size_title)
            .font_weight(FontWeight::BOLD)
            .text_color(theme.expanded_text)
            .child(self.card.title.clone());

        let body = div()
            .id(element_id(&body_key))
            .px(theme.card_padding)
            .pb(theme.card_padding)
            .text_size(theme.font_size)
            .text_color(theme.expanded_text)
            .child(self.card.full_text.clone());

        let (title, body) = match self.transition {
            Some(transition) => (
                title
                    .with_animation(
                        transition.animation_id(&title_key),
                        transition.animation(),
                        |title, delta| title.opacity(delta),
                    )
                    .into_any_element(),
                body.with_animation(
                    transition.animation_id(&body_key),
                    transition.animation(),
                    |body, delta| body.opacity(delta),
                )
                .into_any_element(),
            ),
            None => (title.into_any_element(), body.into_any_element()),
        };

        let card = v_flex()
            .id(element_id(&variant.key(ElementRole::Background)))
            .w_full()
            .items_start()
            .bg(theme.card_fill(self.card.color))
            .rounded(theme.card_radius)
            .child(header)
            .child(title)
            .child(body);

        div().w_full().px(theme.card_padding).child(card)
    }
}
