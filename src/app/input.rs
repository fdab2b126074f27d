use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::app_grid::{cell_at, scroll_offset, visible_rows};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Maps a click inside the sidebar (border included) to a category index.
fn clicked_category(app_state: &AppState<'_>, sidebar: Rect, row: u16) -> Option<usize> {
    if row <= sidebar.y || row + 1 >= sidebar.bottom() {
        return None;
    }
    let index = usize::from(row - sidebar.y - 1) + app_state.sidebar.offset();
    (index < app_state.dispatcher.catalog().category_count()).then_some(index)
}

fn clicked_cell(app_state: &AppState<'_>, grid: Rect, column: u16, row: u16) -> Option<usize> {
    let dispatcher = &app_state.dispatcher;
    let columns = dispatcher.columns();
    let first_row = scroll_offset(dispatcher.selected(), columns, visible_rows(grid));
    cell_at(grid, columns, first_row, column, row).filter(|&i| i < dispatcher.cells().len())
}

fn map_mouse(app_state: &AppState<'_>, mouse: MouseEvent, terminal_size: Size) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::MoveUp),
        MouseEventKind::ScrollDown => Some(Action::MoveDown),
        MouseEventKind::Down(MouseButton::Left) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area, app_state.search.is_some());

            if contains(layout.sidebar, mouse.column, mouse.row) {
                clicked_category(app_state, layout.sidebar, mouse.row).map(Action::SelectCategory)
            } else {
                clicked_cell(app_state, layout.grid_inner(), mouse.column, mouse.row)
                    .map(Action::ClickCell)
            }
        }
        _ => None,
    }
}

fn map_search_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CancelMode,
        KeyCode::Enter => Action::SearchSubmit,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        _ => Action::TextAreaInput(key),
    }
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
    }

    // A notification blocks everything else until acknowledged.
    if app_state.current_notification().is_some() {
        return match event {
            Event::Key(key) if matches!(key.code, KeyCode::Esc | KeyCode::Enter) => {
                Some(Action::DismissNotification)
            }
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Splash => match event {
            Event::Key(_) | Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(_),
                ..
            }) => Some(Action::SkipSplash),
            _ => None,
        },
        AppMode::Quitting => None,
        AppMode::Search => match event {
            Event::Key(key) => Some(map_search_key(key)),
            Event::Mouse(mouse) => map_mouse(app_state, mouse, terminal_size),
            _ => None,
        },
        AppMode::SystemMenu => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SystemMenuNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SystemMenuPrev),
                KeyCode::Enter => Some(Action::SystemMenuSelect),
                _ => None,
            },
            _ => None,
        },
        AppMode::ConfirmSystem => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmSystemAction),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::CancelMode),
                _ => None,
            },
            _ => None,
        },
        AppMode::BackgroundPicker => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::BackgroundNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::BackgroundPrev),
                KeyCode::Enter => Some(Action::BackgroundSelect),
                _ => None,
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => map_mouse(app_state, mouse, terminal_size),
            _ => None,
        },
    }
}
