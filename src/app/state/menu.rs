use crate::domain::models::SystemAction;
use std::path::PathBuf;

fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemMenuState {
    pub selected_index: usize,
    pub pending: Option<SystemAction>,
}

impl SystemMenuState {
    pub fn next(&mut self) {
        self.selected_index = wrap_next(self.selected_index, SystemAction::all().len());
    }

    pub fn prev(&mut self) {
        self.selected_index = wrap_prev(self.selected_index, SystemAction::all().len());
    }

    #[must_use]
    pub fn selected(&self) -> Option<SystemAction> {
        SystemAction::all().get(self.selected_index).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundPickerState {
    pub choices: Vec<PathBuf>,
    pub selected_index: usize,
    pub loading: bool,
}

impl BackgroundPickerState {
    pub fn next(&mut self) {
        self.selected_index = wrap_next(self.selected_index, self.choices.len());
    }

    pub fn prev(&mut self) {
        self.selected_index = wrap_prev(self.selected_index, self.choices.len());
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PathBuf> {
        self.choices.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wraps() {
        let mut menu = SystemMenuState::default();
        menu.prev();
        assert_eq!(menu.selected(), Some(SystemAction::Update));
        menu.next();
        assert_eq!(menu.selected(), Some(SystemAction::SignOut));
    }

    #[test]
    fn test_empty_picker_stays_put() {
        let mut picker = BackgroundPickerState::default();
        picker.next();
        picker.prev();
        assert_eq!(picker.selected_index, 0);
        assert!(picker.selected().is_none());
    }
}
