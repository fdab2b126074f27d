use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings for the launcher's normal mode. Modal screens map their own
/// keys in `input`.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub normal: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut normal = HashMap::new();

        normal.insert(ch('q'), Action::Quit);
        normal.insert(key(KeyCode::Esc), Action::CancelMode);
        normal.insert(key(KeyCode::Tab), Action::ToggleFocus);
        normal.insert(key(KeyCode::BackTab), Action::ToggleFocus);
        normal.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::ToggleFocus,
        );
        normal.insert(key(KeyCode::Enter), Action::Activate);

        // --- Movement ---
        normal.insert(ch('h'), Action::MoveLeft);
        normal.insert(key(KeyCode::Left), Action::MoveLeft);
        normal.insert(ch('l'), Action::MoveRight);
        normal.insert(key(KeyCode::Right), Action::MoveRight);
        normal.insert(ch('k'), Action::MoveUp);
        normal.insert(key(KeyCode::Up), Action::MoveUp);
        normal.insert(ch('j'), Action::MoveDown);
        normal.insert(key(KeyCode::Down), Action::MoveDown);

        // --- Screens ---
        normal.insert(ch('/'), Action::EnterSearch);
        normal.insert(ch('x'), Action::OpenSystemMenu);
        normal.insert(ch('b'), Action::OpenBackgroundPicker);
        normal.insert(ch('?'), Action::ToggleHelp);

        for (index, digit) in ('1'..='9').enumerate() {
            normal.insert(ch(digit), Action::SelectCategory(index));
        }

        Self { normal }
    }
}

impl KeyMap {
    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.normal.get(&normalize(event)).cloned()
    }
}

// Terminals disagree on whether `?` arrives with SHIFT set; only letters keep it.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if let KeyCode::Char(c) = event.code {
        if !c.is_ascii_alphabetic() {
            modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_categories() {
        let map = KeyMap::default();
        assert_eq!(map.get_action(ch('1')), Some(Action::SelectCategory(0)));
        assert_eq!(map.get_action(ch('9')), Some(Action::SelectCategory(8)));
    }

    #[test]
    fn test_shifted_symbol_still_matches() {
        let map = KeyMap::default();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(map.get_action(event), Some(Action::ToggleHelp));
        assert_eq!(map.get_action(ch('z')), None);
    }
}
