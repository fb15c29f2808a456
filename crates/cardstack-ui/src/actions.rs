//! Centralized actions for the card list.
//!
//! Actions are dispatched by GPUI's key binding system.

use gpui::actions;

actions!(cardstack, [Collapse, Quit]);

/// Look up an action by name for GPUI registration.
pub fn action_from_name(name: &str) -> Option<Box<dyn gpui::Action>> {
    match name {
        "collapse" => Some(Box::new(Collapse)),
        "quit" => Some(Box::new(Quit)),
        _ => None,
    }
}
