//! Platform-specific key bindings

use crossterm::event::{KeyEvent, KeyModifiers};

/// Extra modifier accepted for form shortcuts
/// - macOS: SUPER (Cmd key), when the terminal forwards it
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Ctrl works everywhere; Cmd is accepted on macOS as well
pub fn is_command(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(COMMAND_MODIFIER)
}

pub const SAVE_SHORTCUT: &str = "Ctrl+S";

#[cfg(target_os = "macos")]
pub const INPUT_METHOD_SHORTCUT: &str = "Cmd+T";
#[cfg(not(target_os = "macos"))]
pub const INPUT_METHOD_SHORTCUT: &str = "Ctrl+T";

#[cfg(target_os = "macos")]
pub const EXTRACT_SHORTCUT: &str = "Cmd+E";
#[cfg(not(target_os = "macos"))]
pub const EXTRACT_SHORTCUT: &str = "Ctrl+E";

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_ctrl_is_command_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(is_command(&key));
    }

    #[test]
    fn test_plain_key_is_not_command() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!is_command(&key));
        let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert!(!is_command(&key));
    }
}
