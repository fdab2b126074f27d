use crate::app::command::Command;
use crate::domain::models::{GridCell, LaunchId, LaunchOutcome, SystemAction, SystemStats};
use std::path::PathBuf;

#[derive(Debug)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,
    SkipSplash,

    // --- Navigation ---
    ToggleFocus,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SelectCategory(usize), // Render a category by sidebar index
    SelectCell(usize),
    ClickCell(usize), // Select, or activate when already selected
    Activate,          // Launch the selected cell

    // --- Search ---
    EnterSearch,
    TextAreaInput(crossterm::event::KeyEvent),
    SearchSubmit, // Enter in the search bar

    // --- Modals ---
    CancelMode,
    ToggleHelp,
    DismissNotification,
    OpenSystemMenu,
    SystemMenuNext,
    SystemMenuPrev,
    SystemMenuSelect,
    ChooseSystemAction(SystemAction), // Ask for confirmation
    ConfirmSystemAction,
    OpenBackgroundPicker,
    BackgroundNext,
    BackgroundPrev,
    BackgroundSelect,

    // --- Async Results ---
    LaunchFinished(LaunchId, LaunchOutcome),
    InstalledAppsFound(String, Vec<GridCell>), // (query, matches)
    StatsUpdated(SystemStats),
    SplashFinished,
    InstallerRequired(Option<String>),
    BackgroundsListed(Vec<PathBuf>),
    BackgroundSaved(Result<PathBuf, String>),
}
