//! Keyboard shortcut handling.
//!
//! Fields only take numeric characters, so letters are free for commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    /// Append a character to the focused field.
    Input(char),
    Backspace,
    ClearField,
    ToggleDistribution,
    Reset,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('u') => KeyAction::ClearField,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Char(c @ ('0'..='9' | '.' | '-' | '+')) => KeyAction::Input(c),
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char('s') => KeyAction::ToggleDistribution,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Char('j') => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn field_navigation() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevField);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::PrevField);
    }

    #[test]
    fn numeric_input() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Input('7'));
        assert_eq!(map_key(key(KeyCode::Char('.'))), KeyAction::Input('.'));
        assert_eq!(map_key(key(KeyCode::Char('-'))), KeyAction::Input('-'));
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
    }

    #[test]
    fn ctrl_u_clears_field() {
        let event = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::ClearField);
    }

    #[test]
    fn command_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('s'))),
            KeyAction::ToggleDistribution
        );
        assert_eq!(map_key(key(KeyCode::Char('r'))), KeyAction::Reset);
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::Char('k'))), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Char('j'))), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
        let event = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
