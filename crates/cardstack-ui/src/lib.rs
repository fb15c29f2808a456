//! GPUI frontend for the Cardstack card list.
//!
//! This crate provides the native GPUI user interface including:
//! - The card list window and root panel
//! - Collapsed and expanded card components
//! - Theme, actions and keybindings

pub mod actions;
pub mod keymap;
pub mod model;
pub mod theme;
pub mod views;
pub mod window;

// Re-export commonly used types
pub use model::CardListState;
pub use theme::{Appearance, Theme, ThemeExt, ThemeSettings};
pub use views::{CardListPanel, CollapsedCard, ExpandedCard};
pub use window::{open_card_window, run_app};
