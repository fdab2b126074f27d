use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, Focus, SearchState},
};
use crate::domain::models::LaunchSpec;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterSearch => {
            state.mode = AppMode::Search;
            state.focus = Focus::Grid;
            if state.search.is_none() {
                state.search = Some(SearchState::default());
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            let Some(search) = &mut state.search else {
                return UpdateResult::Handled(None);
            };
            search.text_area.input(*key);
            if !search.is_dirty() {
                return UpdateResult::Handled(None);
            }
            let text = search.text();
            search.applied.clone_from(&text);
            UpdateResult::Handled(state.dispatcher.search(&text))
        }
        Action::SearchSubmit => UpdateResult::Handled(submit(state)),
        Action::InstalledAppsFound(query, cells) => {
            let added = state.dispatcher.append_installed(query, cells.clone());
            if added > 0 {
                tracing::debug!(query, added, "installed applications appended");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Enter in the search bar: keep the results and move to the grid, or run the
/// text as a command when nothing matched.
fn submit(state: &mut AppState) -> Option<Command> {
    let text = state.search.as_ref().map(SearchState::text).unwrap_or_default();
    if text.is_empty() {
        close_search(state);
        return None;
    }

    if !state.dispatcher.cells().is_empty() {
        state.mode = AppMode::Normal;
        state.focus = Focus::Grid;
        return None;
    }

    close_search(state);
    state.status_message = Some(format!("Running {text}..."));
    Some(state.dispatcher.launch(text.clone(), LaunchSpec::Shell(text)))
}

/// Leaves search and restores the category that was showing before.
pub fn close_search(state: &mut AppState) {
    state.search = None;
    state.mode = AppMode::Normal;
    state.focus = Focus::Sidebar;
    let index = state.sidebar.selected().unwrap_or(0);
    if !state.select_category(index) {
        state.dispatcher.hide();
    }
}
