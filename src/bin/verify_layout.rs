use shelf::app::state::{
    AppMode, AppState, BackgroundPickerState, ErrorSeverity, ErrorState, SystemMenuState,
};
use shelf::app::ui;
use shelf::domain::models::SystemAction;
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;

fn draw_all_sizes(app_state: &mut AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    let mut app_state = AppState::default();
    draw_all_sizes(&mut app_state);
    app_state.open_shelf();

    let modes = [
        AppMode::Normal,
        AppMode::Search,
        AppMode::SystemMenu,
        AppMode::ConfirmSystem,
        AppMode::BackgroundPicker,
        AppMode::Help,
        AppMode::Quitting,
    ];

    for &mode in &modes {
        app_state.mode = mode;
        app_state.system_menu = Some(SystemMenuState {
            selected_index: 2,
            pending: Some(SystemAction::Update),
        });
        app_state.background_picker = Some(BackgroundPickerState {
            choices: vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.jpg")],
            selected_index: 1,
            loading: false,
        });
        draw_all_sizes(&mut app_state);
    }

    // Also test with queued launch failures
    app_state.mode = AppMode::Normal;
    for _ in 0..2 {
        let mut error = ErrorState::new(
            "Some Application With A Long Name exited with code 127 and left a message that might wrap",
            ErrorSeverity::Error,
        );
        error.suggestions = vec!["'someapp' is not installed or not on PATH".to_string()];
        app_state.push_notification(error);
    }
    draw_all_sizes(&mut app_state);

    println!("Layout verification completed successfully!");
}
