use super::dispatcher::Dispatcher;
use super::keymap::KeyMap;
use crate::config::Config;
use crate::infrastructure::icons::IconCache;
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod header;
pub mod input;
pub mod menu;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use header::HeaderState;
pub use input::{AppTextArea, SearchState};
pub use menu::{BackgroundPickerState, SystemMenuState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Splash,           // Loading gauge before the shelf opens
    Normal,           // Browsing categories and the grid
    Search,           // Typing into the search bar
    SystemMenu,       // Sign out / reboot / shutdown / update
    ConfirmSystem,    // Confirming a system action
    BackgroundPicker, // Choosing a background image
    Help,             // Showing the help overlay
    Quitting,         // Waiting for launches to stop
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Grid,
}

#[derive(Debug)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub notifications: VecDeque<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Shelf ---
    pub dispatcher: Dispatcher,
    pub focus: Focus,
    pub sidebar: ListState,
    pub search: Option<SearchState<'a>>,

    // --- Screens ---
    pub splash_progress: u16,
    pub header: HeaderState,
    pub system_menu: Option<SystemMenuState>,
    pub background_picker: Option<BackgroundPickerState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
    pub settings: Arc<Config>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(settings: Arc<Config>, dispatcher: Dispatcher) -> Self {
        let mut state = Self {
            should_quit: false,
            mode: AppMode::Splash,
            notifications: VecDeque::new(),
            status_message: None,
            status_clear_time: None,
            dispatcher,
            focus: Focus::Sidebar,
            sidebar: ListState::default(),
            search: None,
            splash_progress: 0,
            header: HeaderState::default(),
            system_menu: None,
            background_picker: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
            settings,
        };
        state.header.set_clock(chrono::Local::now());
        if !state.settings.splash.enabled {
            state.open_shelf();
        }
        state
    }

    /// Leaves the splash screen and shows the first (or selected) category.
    pub fn open_shelf(&mut self) {
        self.mode = AppMode::Normal;
        self.splash_progress = 100;
        let index = self.sidebar.selected().unwrap_or(0);
        self.select_category(index);
    }

    /// Renders the category at `index` in the sidebar. Out-of-range indices
    /// are ignored.
    pub fn select_category(&mut self, index: usize) -> bool {
        let Some(name) = self.dispatcher.catalog().category_at(index).map(str::to_string) else {
            return false;
        };
        self.sidebar.select(Some(index));
        self.dispatcher.render(&name);
        true
    }

    /// Preselects a category by name, e.g. from the command line.
    pub fn select_category_named(&mut self, name: &str) -> bool {
        let position = self
            .dispatcher
            .catalog()
            .categories()
            .position(|c| c.eq_ignore_ascii_case(name));
        match position {
            Some(index) => self.select_category(index),
            None => {
                tracing::warn!(category = name, "unknown category requested");
                false
            }
        }
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&ErrorState> {
        self.notifications.front()
    }

    pub fn push_notification(&mut self, error: ErrorState) {
        tracing::warn!(message = %error.message, "notification");
        self.notifications.push_back(error);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let settings = Arc::new(Config::default());
        let dispatcher = Dispatcher::new(
            Arc::new(settings.build_catalog()),
            Arc::new(IconCache::default()),
            settings.grid.columns,
        );
        Self::new(settings, dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dispatcher::GridView;

    fn no_splash() -> AppState<'static> {
        let mut config = Config::default();
        config.splash.enabled = false;
        let settings = Arc::new(config);
        let dispatcher = Dispatcher::new(
            Arc::new(settings.build_catalog()),
            Arc::new(IconCache::default()),
            settings.grid.columns,
        );
        AppState::new(settings, dispatcher)
    }

    #[test]
    fn test_starts_on_splash_by_default() {
        let state = AppState::default();
        assert_eq!(state.mode, AppMode::Splash);
        assert!(!state.dispatcher.is_visible());
    }

    #[test]
    fn test_without_splash_first_category_is_rendered() {
        let state = no_splash();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.sidebar.selected(), Some(0));
        assert_eq!(
            state.dispatcher.view(),
            &GridView::Category("Apex Tools".to_string())
        );
    }

    #[test]
    fn test_select_category_by_name() {
        let mut state = no_splash();
        assert!(state.select_category_named("gaming"));
        assert_eq!(
            state.dispatcher.view(),
            &GridView::Category("Gaming".to_string())
        );
        assert!(!state.select_category_named("Nope"));
        assert!(!state.select_category(99));
    }
}
