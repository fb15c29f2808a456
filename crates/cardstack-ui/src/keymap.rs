//! GPUI keybinding registration.
//!
//! Default bindings are a static table so they can be checked without a GPUI
//! app. `apply_keybindings()` turns them into GPUI bindings at startup.

use gpui::{App, DummyKeyboardMapper, KeyBinding, KeyBindingContextPredicate};
use std::rc::Rc;

use crate::actions::action_from_name;

/// Key context set by the card list panel.
pub const CARD_LIST_CONTEXT: &str = "CardList";

/// A keystroke bound to a named action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBinding {
    pub key: &'static str,
    pub action: &'static str,
    /// `None` binds globally.
    pub context: Option<&'static str>,
}

/// Bindings registered at startup.
pub const DEFAULT_BINDINGS: &[DefaultBinding] = &[
    DefaultBinding {
        key: "escape",
        action: "collapse",
        context: Some(CARD_LIST_CONTEXT),
    },
    DefaultBinding {
        key: "cmd-q",
        action: "quit",
        context: None,
    },
    DefaultBinding {
        key: "ctrl-q",
        action: "quit",
        context: None,
    },
];

/// Register every default binding with GPUI.
pub fn apply_keybindings(cx: &mut App) {
    for binding in DEFAULT_BINDINGS {
        apply_binding(binding, cx);
    }
    tracing::debug!("Registered {} default bindings", DEFAULT_BINDINGS.len());
}

fn apply_binding(binding: &DefaultBinding, cx: &mut App) {
    let Some(action) = action_from_name(binding.action) else {
        tracing::warn!("Unknown action: {}", binding.action);
        return;
    };

    let context_predicate = binding
        .context
        .and_then(|c| KeyBindingContextPredicate::parse(c).ok())
        .map(Rc::new);

    match KeyBinding::load(
        binding.key,
        action,
        context_predicate,
        false, // use_key_equivalents
        None,  // action_input
        &DummyKeyboardMapper,
    ) {
        Ok(key_binding) => {
            cx.bind_keys([key_binding]);
            tracing::debug!(
                "Registered binding: {} -> {} (context: {:?})",
                binding.key,
                binding.action,
                binding.context
            );
        }
        Err(e) => {
            tracing::warn!("Failed to create binding for '{}': {:?}", binding.key, e);
        }
    }
}
