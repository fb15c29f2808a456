//! Cardstack - main entry point.
//!
//! Loads configuration, builds the card collection, and starts the GPUI
//! application.

use cardstack_core::AppConfig;
use cardstack_ui::run_app;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Cardstack starting...");

    let config = AppConfig::load_or_default();
    let cards = config.cards.build_cards();
    tracing::info!("Generated {} cards", cards.len());

    tracing::info!("Starting GPUI application...");
    run_app(cards, config);
}
