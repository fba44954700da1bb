//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which form field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The free-text income field.
    #[default]
    Income,
    /// The city selector.
    City,
}

impl Focus {
    /// The other field.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Focus::Income => Focus::City,
            Focus::City => Focus::Income,
        }
    }
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    InsertChar(char),
    DeleteChar,
    CityNext,
    CityPrev,
    Search,
    None,
}

/// Map a key event to an action, given the focused field.
///
/// The income field accepts arbitrary text; sanitizing happens at
/// derivation time, so every printable character is inserted verbatim.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Search,
        KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::BackTab => KeyAction::FocusPrev,
        KeyCode::Up if focus == Focus::City => KeyAction::CityPrev,
        KeyCode::Down if focus == Focus::City => KeyAction::CityNext,
        KeyCode::Backspace if focus == Focus::Income => KeyAction::DeleteChar,
        KeyCode::Char(c) if focus == Focus::Income => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn esc_quits_from_either_focus() {
        assert_eq!(map_key(plain(KeyCode::Esc), Focus::Income), KeyAction::Quit);
        assert_eq!(map_key(plain(KeyCode::Esc), Focus::City), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event, Focus::Income), KeyAction::Quit);
    }

    #[test]
    fn enter_searches() {
        assert_eq!(
            map_key(plain(KeyCode::Enter), Focus::Income),
            KeyAction::Search
        );
        assert_eq!(
            map_key(plain(KeyCode::Enter), Focus::City),
            KeyAction::Search
        );
    }

    #[test]
    fn tab_cycles_focus() {
        assert_eq!(
            map_key(plain(KeyCode::Tab), Focus::Income),
            KeyAction::FocusNext
        );
        assert_eq!(
            map_key(plain(KeyCode::BackTab), Focus::City),
            KeyAction::FocusPrev
        );
    }

    #[test]
    fn arrows_only_move_the_city_selector() {
        assert_eq!(map_key(plain(KeyCode::Up), Focus::City), KeyAction::CityPrev);
        assert_eq!(
            map_key(plain(KeyCode::Down), Focus::City),
            KeyAction::CityNext
        );
        assert_eq!(map_key(plain(KeyCode::Up), Focus::Income), KeyAction::None);
        assert_eq!(
            map_key(plain(KeyCode::Down), Focus::Income),
            KeyAction::None
        );
    }

    #[test]
    fn typing_goes_to_the_income_field() {
        assert_eq!(
            map_key(plain(KeyCode::Char('6')), Focus::Income),
            KeyAction::InsertChar('6')
        );
        // Arbitrary text is accepted; sanitizing happens later.
        assert_eq!(
            map_key(plain(KeyCode::Char('x')), Focus::Income),
            KeyAction::InsertChar('x')
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('6')), Focus::City),
            KeyAction::None
        );
    }

    #[test]
    fn backspace_deletes_in_income_only() {
        assert_eq!(
            map_key(plain(KeyCode::Backspace), Focus::Income),
            KeyAction::DeleteChar
        );
        assert_eq!(
            map_key(plain(KeyCode::Backspace), Focus::City),
            KeyAction::None
        );
    }

    #[test]
    fn focus_toggles() {
        assert_eq!(Focus::Income.toggled(), Focus::City);
        assert_eq!(Focus::City.toggled(), Focus::Income);
    }
}
