//! Theme system for the card list.
//!
//! Provides a two-layer theming system:
//! - `ThemeSettings`: User-configurable preferences (from config.toml)
//! - `Theme`: Computed colors and metrics derived from settings + system appearance

use cardstack_core::{AppearanceConfig, Rgb, ThemeMode};
use gpui::{hsla, px, App, Global, Hsla, Pixels, Rgba, SharedString};

// =============================================================================
// Theme Settings (User-Configurable)
// =============================================================================

/// User-configurable theme settings.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Light, dark, or follow system.
    pub appearance: Appearance,
    /// Main font family.
    pub font_family: SharedString,
    /// Base font size.
    pub font_size: Pixels,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            appearance: Appearance::Dark,
            font_family: "Inter".into(),
            font_size: px(15.0),
        }
    }
}

impl From<&AppearanceConfig> for ThemeSettings {
    fn from(config: &AppearanceConfig) -> Self {
        Self {
            appearance: config.theme.into(),
            ..Default::default()
        }
    }
}

/// Appearance mode preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
    System,
}

impl From<ThemeMode> for Appearance {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => Appearance::System,
        }
    }
}

// =============================================================================
// Theme (Computed)
// =============================================================================

/// The active theme.
///
/// Access via `cx.theme()` in render methods.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether this is a dark theme.
    pub is_dark: bool,

    // -------------------------------------------------------------------------
    // Colors
    // -------------------------------------------------------------------------
    /// Window backdrop behind the list.
    pub background: Hsla,
    /// Title text on a collapsed card.
    pub collapsed_text: Hsla,
    /// Title and body text on an expanded card.
    pub expanded_text: Hsla,
    /// Close button glyph.
    pub close_button: Hsla,
    /// Fill for image tiles without an asset.
    pub image_placeholder: Hsla,
    /// Text inside image placeholders.
    pub image_placeholder_text: Hsla,

    // -------------------------------------------------------------------------
    // Typography
    // -------------------------------------------------------------------------
    pub font_family: SharedString,
    /// Body text size.
    pub font_size: Pixels,
    /// Collapsed title size.
    pub font_size_headline: Pixels,
    /// Expanded title size.
    pub font_size_title: Pixels,

    // -------------------------------------------------------------------------
    // Metrics
    // -------------------------------------------------------------------------
    /// Outer padding around the list.
    pub list_padding: Pixels,
    /// Vertical gap between cards.
    pub list_gap: Pixels,
    /// Padding inside a card.
    pub card_padding: Pixels,
    /// Gap between image and title in a collapsed row.
    pub row_gap: Pixels,
    /// Card background corner radius.
    pub card_radius: Pixels,
    /// Collapsed image edge length.
    pub thumbnail_size: Pixels,
    /// Collapsed image corner radius.
    pub thumbnail_radius: Pixels,
    /// Expanded image height.
    pub hero_height: Pixels,
}

impl Theme {
    /// Create a theme from settings and system appearance.
    pub fn from_settings(settings: &ThemeSettings, system_is_dark: bool) -> Self {
        let is_dark = match settings.appearance {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_is_dark,
        };

        let base_size: f32 = settings.font_size.into();

        Self {
            is_dark,

            background: if is_dark {
                hsla(0.0, 0.0, 0.0, 0.80)
            } else {
                hsla(0.0, 0.0, 0.95, 0.90)
            },
            // Card fills are always bright, so text colors do not follow the mode
            collapsed_text: hsla(0.0, 0.0, 1.0, 1.0),
            expanded_text: hsla(0.0, 0.0, 0.0, 1.0),
            close_button: hsla(0.0, 0.0, 1.0, 1.0),
            image_placeholder: hsla(0.0, 0.0, 1.0, 0.35),
            image_placeholder_text: hsla(0.0, 0.0, 0.0, 0.55),

            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            font_size_headline: px(base_size + 2.0),
            font_size_title: px(base_size + 13.0),

            list_padding: px(16.0),
            list_gap: px(20.0),
            card_padding: px(16.0),
            row_gap: px(15.0),
            card_radius: px(20.0),
            thumbnail_size: px(60.0),
            thumbnail_radius: px(10.0),
            hero_height: px(300.0),
        }
    }

    /// Create default dark theme.
    pub fn dark() -> Self {
        Self::from_settings(&ThemeSettings::default(), true)
    }

    /// Background fill for a card.
    pub fn card_fill(&self, color: Rgb) -> Hsla {
        Rgba {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
        .into()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for Theme {}

// =============================================================================
// Theme Extensions
// =============================================================================

/// Extension trait for convenient theme access.
pub trait ThemeExt {
    /// Get the current theme.
    fn theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}

// =============================================================================
// Tests
// =============================================================================
