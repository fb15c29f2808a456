//! Core types for the Cardstack card list.
//!
//! This crate contains everything that does not depend on GPUI:
//! - Card, color and image types
//! - The placeholder card factory
//! - The single-slot selection controller
//! - Render variant selection and correlation keys
//! - Configuration and error types

mod card;
mod config;
mod error;
mod factory;
mod render;
mod selection;

pub use card::{Card, CardId, ImageRef, Rgb};
pub use config::{
    config_dir, config_path, AnimationConfig, AppConfig, AppearanceConfig, CardsConfig, ThemeMode,
    CONFIG_PATH_ENV,
};
pub use error::ConfigError;
pub use factory::{
    CardFactory, ChannelRange, DEFAULT_CARD_COUNT, DEFAULT_CHANNEL_FLOOR, DEFAULT_IMAGE_VARIANTS,
};
pub use render::{render_card, render_list, CorrelationKey, ElementRole, RenderVariant};
pub use selection::{ExpansionPhase, SelectionController};
