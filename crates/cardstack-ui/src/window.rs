//! Window management for the card list.
//!
//! This module opens the single application window hosting `CardListPanel`
//! and runs the GPUI application.

use gpui::{
    px, size, App, AppContext, Bounds, Focusable, TitlebarOptions, WindowAppearance,
    WindowBounds, WindowHandle, WindowOptions,
};

use cardstack_core::{AppConfig, Card};

use crate::actions::Quit;
use crate::keymap::apply_keybindings;
use crate::theme::{Theme, ThemeSettings};
use crate::views::CardListPanel;

// =============================================================================
// Window Configuration
// =============================================================================

/// Default window dimensions.
pub const DEFAULT_WIDTH: f32 = 420.0;
pub const DEFAULT_HEIGHT: f32 = 760.0;

/// Window title.
pub const WINDOW_TITLE: &str = "Cards";

/// Create window options for the card list.
///
/// Bounds are set after creation since centering needs App context.
fn create_window_options() -> WindowOptions {
    WindowOptions {
        window_bounds: None,
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        is_movable: true,
        ..Default::default()
    }
}

fn system_is_dark(appearance: WindowAppearance) -> bool {
    matches!(
        appearance,
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

// =============================================================================
// Window
// =============================================================================

/// Open the card list window.
///
/// Returns `None` if the window couldn't be created.
pub fn open_card_window(
    cards: Vec<Card>,
    config: &AppConfig,
    cx: &mut App,
) -> Option<WindowHandle<CardListPanel>> {
    let window_size = size(px(DEFAULT_WIDTH), px(DEFAULT_HEIGHT));
    let bounds = Bounds::centered(None, window_size, cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..create_window_options()
    };

    let settings = ThemeSettings::from(&config.appearance);
    let handle = cx
        .open_window(options, |window, cx| {
            let theme = Theme::from_settings(&settings, system_is_dark(window.appearance()));
            tracing::debug!("Theme resolved (dark: {})", theme.is_dark);
            cx.set_global(theme);

            cx.new(|cx| CardListPanel::new(cards, config, cx))
        })
        .ok()?;

    // Focus the panel so key bindings reach it
    let _ = handle.update(cx, |panel, window, cx| {
        let focus = panel.focus_handle(cx);
        window.focus(&focus, cx);
        window.activate_window();
    });

    Some(handle)
}

// =============================================================================
// App Entry Point
// =============================================================================

/// Initialize and run the application.
///
/// 1. Creates the GPUI application
/// 2. Registers keybindings and global actions
/// 3. Opens the card list window
/// 4. Runs the main loop
pub fn run_app(cards: Vec<Card>, config: AppConfig) {
    gpui::Application::new().run(move |cx| {
        gpui_component::init(cx);

        apply_keybindings(cx);
        cx.on_action(|_: &Quit, cx: &mut App| {
            tracing::info!("Quit requested");
            cx.quit();
        });

        if open_card_window(cards, &config, cx).is_none() {
            tracing::error!("Failed to create card list window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_options() {
        let options = create_window_options();
        assert!(options.show);
        assert!(options.focus);
        let title = options.titlebar.and_then(|t| t.title);
        assert_eq!(title.as_deref(), Some(WINDOW_TITLE));
    }

    #[test]
    fn test_system_is_dark() {
        assert!(system_is_dark(WindowAppearance::Dark));
        assert!(system_is_dark(WindowAppearance::VibrantDark));
        assert!(!system_is_dark(WindowAppearance::Light));
        assert!(!system_is_dark(WindowAppearance::VibrantLight));
    }
}
