//! State model for the card list UI.
//!
//! All types are GPUI-independent for testability.

mod state;

pub use state::CardListState;
