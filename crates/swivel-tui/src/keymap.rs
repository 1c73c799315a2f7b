use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use swivel_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', using default", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.next, Action::Next);
        add_binding(&config.prev, Action::Prev);
        add_binding(&config.toggle_autoplay, Action::ToggleAutoplay);

        // Hardcoded bindings that shouldn't be configurable
        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow keys always work as alternatives
        bindings
            .entry(KeyBinding::simple(KeyCode::Left))
            .or_insert(Action::Prev);
        bindings
            .entry(KeyBinding::simple(KeyCode::Right))
            .or_insert(Action::Next);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse a Vim-style key notation into a binding.
/// Supports "x", "<C-x>", "<S-x>", "<Space>", "<Esc>", "<CR>", "<Tab>",
/// "<Left>", "<Right>", "<Up>", "<Down>".
fn parse_key_binding(key_str: &str) -> Option<KeyBinding> {
    if key_str.is_empty() {
        return None;
    }

    // Plain single character
    let mut chars = key_str.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyBinding::new(KeyCode::Char(c), modifiers));
    }

    // Bracketed notation
    let inner = key_str.strip_prefix('<')?.strip_suffix('>')?;

    if let Some(rest) = inner.strip_prefix("C-") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyBinding::ctrl(KeyCode::Char(c)));
        }
        return None;
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyBinding::new(
                KeyCode::Char(c.to_ascii_uppercase()),
                KeyModifiers::SHIFT,
            ));
        }
        return None;
    }

    let code = match inner {
        "Space" => KeyCode::Char(' '),
        "Esc" => KeyCode::Esc,
        "CR" | "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        _ => return None,
    };
    Some(KeyBinding::simple(code))
}
