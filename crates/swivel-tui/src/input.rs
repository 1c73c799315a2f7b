use crossterm::event::{KeyCode, KeyEvent};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Advance to the next panel
    Next,
    /// Go back to the previous panel
    Prev,
    /// Jump straight to a panel (digit keys, like a dot click)
    JumpTo(usize),
    /// Pause or resume autoplay
    ToggleAutoplay,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    // Digits 1-9 jump straight to that panel, mirroring a dot click.
    // Out-of-range digits are clamped downstream, like stale dots.
    if let KeyCode::Char(c) = key.code {
        if let Some(digit) = c.to_digit(10) {
            if digit >= 1 {
                return Action::JumpTo(digit as usize - 1);
            }
        }
    }

    keymap
        .get(&KeyBinding::new(key.code, key.modifiers))
        .copied()
        .unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_jump_to_panel() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('1')), &keymap),
            Action::JumpTo(0)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('9')), &keymap),
            Action::JumpTo(8)
        );
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &keymap), Action::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &keymap), Action::Next);
        assert_eq!(handle_key_event(press(KeyCode::Char('h')), &keymap), Action::Prev);
        assert_eq!(
            handle_key_event(press(KeyCode::Char(' ')), &keymap),
            Action::ToggleAutoplay
        );
    }

    #[test]
    fn test_arrow_key_fallbacks() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Right), &keymap), Action::Next);
        assert_eq!(handle_key_event(press(KeyCode::Left), &keymap), Action::Prev);
    }

    #[test]
    fn test_unbound_key_is_none() {
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('z')), &keymap), Action::None);
    }
}
