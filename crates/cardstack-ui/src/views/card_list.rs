//! Card list panel - the root view.
//!
//! Owns the `CardListState` and renders one representation per card. Tap
//! and keyboard handlers are the only code that changes the selection.

use std::path::PathBuf;
use std::time::Duration;

use gpui::{
    div, prelude::*, App, ClickEvent, Context, FocusHandle, Focusable, IntoElement, ParentElement,
    Render, ScrollHandle, Styled, Window,
};

use cardstack_core::{AppConfig, Card, CardId, RenderVariant};

use crate::actions::Collapse;
use crate::keymap::CARD_LIST_CONTEXT;
use crate::model::CardListState;
use crate::theme::ThemeExt;
use crate::views::transition::Transition;
use crate::views::{CollapsedCard, ExpandedCard};

/// The scrollable list of cards.
pub struct CardListPanel {
    /// Cards and selection.
    state: CardListState,
    /// Where image assets are looked up.
    assets_dir: Option<PathBuf>,
    /// Length of the expand/collapse transition.
    transition_duration: Duration,
    /// Focus handle, needed for key bindings.
    focus_handle: FocusHandle,
    /// Scroll handle for the list.
    scroll_handle: ScrollHandle,
}

impl CardListPanel {
    /// Create a new panel over `cards`, all collapsed.
    pub fn new(cards: Vec<Card>, config: &AppConfig, cx: &mut Context<Self>) -> Self {
        tracing::info!("Card list created with {} cards", cards.len());

        Self {
            state: CardListState::new(cards),
            assets_dir: config.appearance.assets_dir.clone(),
            transition_duration: config.animation.duration(),
            focus_handle: cx.focus_handle(),
            scroll_handle: ScrollHandle::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Tap Handlers
    // -------------------------------------------------------------------------

    fn on_card_tap(&mut self, id: CardId, cx: &mut Context<Self>) {
        if self.state.tap_collapsed(id) {
            tracing::debug!("Expanded card {}", id);
            cx.notify();
        }
    }

    fn on_dismiss_tap(&mut self, cx: &mut Context<Self>) {
        if self.state.tap_dismiss() {
            tracing::debug!("Collapsed all cards");
            cx.notify();
        }
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn on_collapse(&mut self, _: &Collapse, _window: &mut Window, cx: &mut Context<Self>) {
        self.on_dismiss_tap(cx);
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    fn transition_for(&self, id: CardId) -> Option<Transition> {
        self.state.is_transitioning(id).then(|| Transition {
            generation: self.state.generation(),
            duration: self.transition_duration,
        })
    }

    fn render_variant(
        &self,
        variant: RenderVariant<'_>,
        cx: &mut Context<Self>,
    ) -> gpui::AnyElement {
        let card = variant.card();
        let transition = self.transition_for(card.id);

        match variant {
            RenderVariant::Collapsed(card) => {
                let id = card.id;
                CollapsedCard::new(
                    card.clone(),
                    self.assets_dir.clone(),
                    cx.listener(move |this: &mut Self, _: &ClickEvent, _window, cx| {
                        this.on_card_tap(id, cx);
                    }),
                )
                .transition(transition)
                .into_any_element()
            }
            RenderVariant::Expanded(card) => ExpandedCard::new(
                card.clone(),
                self.assets_dir.clone(),
                cx.listener(|this: &mut Self, _: &ClickEvent, _window, cx| {
                    this.on_dismiss_tap(cx);
                }),
            )
            .transition(transition)
            .into_any_element(),
        }
    }
}

// =============================================================================
// Focusable
// =============================================================================

impl Focusable for CardListPanel {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// Render
// =============================================================================

impl Render for CardListPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        let cards: Vec<_> = self
            .state
            .variants()
            .into_iter()
            .map(|variant| self.render_variant(variant, cx))
            .collect();

        div()
            .id("card-list-panel")
            .key_context(CARD_LIST_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_collapse))
            .size_full()
            .bg(theme.background)
            .font_family(theme.font_family.clone())
            .text_size(theme.font_size)
            .child(
                div()
                    .id("card-list")
                    .track_scroll(&self.scroll_handle)
                    .overflow_y_scroll()
                    .size_full()
                    .flex()
                    .flex_col()
                    .gap(theme.list_gap)
                    .p(theme.list_padding)
                    .children(cards),
            )
    }
}
