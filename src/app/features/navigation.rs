use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, Focus},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Sidebar if !state.dispatcher.cells().is_empty() => Focus::Grid,
                _ => Focus::Sidebar,
            };
            UpdateResult::Handled(None)
        }
        Action::MoveUp => {
            match state.focus {
                Focus::Sidebar => move_category(state, -1),
                Focus::Grid => state.dispatcher.move_by(0, -1),
            }
            UpdateResult::Handled(None)
        }
        Action::MoveDown => {
            match state.focus {
                Focus::Sidebar => move_category(state, 1),
                Focus::Grid => state.dispatcher.move_by(0, 1),
            }
            UpdateResult::Handled(None)
        }
        Action::MoveLeft => {
            if state.focus == Focus::Grid {
                if state.dispatcher.selected() % state.dispatcher.columns() == 0 {
                    state.focus = Focus::Sidebar;
                } else {
                    state.dispatcher.move_by(-1, 0);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::MoveRight => {
            match state.focus {
                Focus::Sidebar if !state.dispatcher.cells().is_empty() => {
                    state.focus = Focus::Grid;
                }
                Focus::Grid => state.dispatcher.move_by(1, 0),
                Focus::Sidebar => {}
            }
            UpdateResult::Handled(None)
        }
        Action::SelectCategory(index) => {
            if state.mode == AppMode::Search {
                state.search = None;
                state.mode = AppMode::Normal;
            }
            state.select_category(*index);
            UpdateResult::Handled(None)
        }
        Action::SelectCell(index) => {
            state.dispatcher.select(*index);
            state.focus = Focus::Grid;
            UpdateResult::Handled(None)
        }
        Action::ClickCell(index) => {
            let already_selected =
                state.focus == Focus::Grid && state.dispatcher.selected() == *index;
            if already_selected {
                return UpdateResult::Handled(activate(state, *index));
            }
            state.dispatcher.select(*index);
            state.focus = Focus::Grid;
            UpdateResult::Handled(None)
        }
        Action::Activate => match state.focus {
            Focus::Sidebar => {
                if !state.dispatcher.cells().is_empty() {
                    state.focus = Focus::Grid;
                }
                UpdateResult::Handled(None)
            }
            Focus::Grid => {
                let index = state.dispatcher.selected();
                UpdateResult::Handled(activate(state, index))
            }
        },
        _ => UpdateResult::NotHandled,
    }
}

fn activate(state: &mut AppState, index: usize) -> Option<Command> {
    let command = state.dispatcher.activate(index)?;
    if let Some(cell) = state.dispatcher.cells().get(index) {
        state.status_message = Some(format!("Launching {}...", cell.entry.display_name));
    }
    Some(command)
}

fn move_category(state: &mut AppState, delta: isize) {
    let len = state.dispatcher.catalog().category_count();
    let next = calculate_new_index(state.sidebar.selected(), delta, len);
    state.select_category(next);
}

fn calculate_new_index(current: Option<usize>, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match current {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dispatcher::GridView;

    fn state() -> AppState<'static> {
        let mut state = AppState::default();
        state.open_shelf();
        state
    }

    #[test]
    fn test_calculate_new_index_wraps() {
        assert_eq!(calculate_new_index(Some(0), -1, 3), 2);
        assert_eq!(calculate_new_index(Some(2), 1, 3), 0);
        assert_eq!(calculate_new_index(None, 1, 3), 0);
        assert_eq!(calculate_new_index(Some(1), 1, 0), 0);
    }

    #[test]
    fn test_sidebar_moves_render_categories() {
        let mut state = state();
        update(&mut state, &Action::MoveDown);
        assert_eq!(state.dispatcher.view(), &GridView::Category("Files".to_string()));
        update(&mut state, &Action::MoveUp);
        update(&mut state, &Action::MoveUp);
        assert_eq!(state.dispatcher.view(), &GridView::Category("System".to_string()));
    }

    #[test]
    fn test_left_edge_returns_to_sidebar() {
        let mut state = state();
        update(&mut state, &Action::SelectCategory(4)); // Gaming
        update(&mut state, &Action::MoveRight);
        assert_eq!(state.focus, Focus::Grid);
        update(&mut state, &Action::MoveRight);
        assert_eq!(state.dispatcher.selected(), 1);
        update(&mut state, &Action::MoveLeft);
        update(&mut state, &Action::MoveLeft);
        assert_eq!(state.focus, Focus::Sidebar);
    }

    #[test]
    fn test_click_selects_then_launches() {
        let mut state = state();
        let first = update(&mut state, &Action::ClickCell(0));
        assert!(matches!(first, UpdateResult::Handled(None)));
        assert_eq!(state.focus, Focus::Grid);

        let second = update(&mut state, &Action::ClickCell(0));
        assert!(matches!(
            second,
            UpdateResult::Handled(Some(Command::Launch { .. }))
        ));
        assert_eq!(state.dispatcher.active_count(), 1);
        assert!(state.status_message.as_deref().unwrap().contains("Apex Gamester"));
    }
}
