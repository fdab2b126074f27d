use super::search::close_search;
use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, Focus},
};
use crate::domain::models::LaunchSpec;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Quit => {
            state.should_quit = true;
            state.mode = AppMode::Quitting;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            match state.mode {
                AppMode::Search => close_search(state),
                AppMode::Normal if state.search.is_some() => close_search(state),
                AppMode::Normal => state.focus = Focus::Sidebar,
                AppMode::SystemMenu | AppMode::ConfirmSystem => {
                    state.system_menu = None;
                    state.mode = AppMode::Normal;
                }
                AppMode::BackgroundPicker => {
                    state.background_picker = None;
                    state.mode = AppMode::Normal;
                }
                AppMode::Help => state.mode = AppMode::Normal,
                AppMode::Splash | AppMode::Quitting => {}
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::DismissNotification => {
            state.notifications.pop_front();
            UpdateResult::Handled(None)
        }

        // --- Splash ---
        Action::SkipSplash => {
            if state.mode == AppMode::Splash && state.splash_progress < 100 {
                state.splash_progress = 100;
                return UpdateResult::Handled(finish_splash(state));
            }
            UpdateResult::Handled(None)
        }
        Action::SplashFinished => {
            if state.mode == AppMode::Splash {
                state.open_shelf();
            }
            UpdateResult::Handled(None)
        }
        Action::InstallerRequired(installer) => {
            if state.mode == AppMode::Splash {
                state.open_shelf();
            }
            let Some(installer) = installer else {
                return UpdateResult::Handled(None);
            };
            state.status_message = Some("Running first-time setup...".to_string());
            UpdateResult::Handled(Some(state.dispatcher.launch(
                "First-time setup".to_string(),
                LaunchSpec::Shell(installer.clone()),
            )))
        }

        Action::StatsUpdated(stats) => {
            state.header.set_stats(stats);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Advances the splash gauge by one step. Returns a command once the gauge
/// reaches the end.
pub fn advance_splash(state: &mut AppState) -> Option<Command> {
    if state.mode != AppMode::Splash || state.splash_progress >= 100 {
        return None;
    }
    let step = state.settings.splash.step.max(1);
    state.splash_progress = state.splash_progress.saturating_add(step).min(100);
    if state.splash_progress < 100 {
        return None;
    }
    finish_splash(state)
}

// With an install marker configured the shelf opens once the marker has been
// checked; otherwise it opens right away.
fn finish_splash(state: &mut AppState) -> Option<Command> {
    match state.settings.splash.install_marker.clone() {
        Some(marker) => Some(Command::CheckInstall {
            marker,
            installer: state.settings.splash.installer_command.clone(),
        }),
        None => {
            state.open_shelf();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn with_marker() -> AppState<'static> {
        let mut config = Config::default();
        config.splash.install_marker = Some(PathBuf::from("/tmp/shelf-marker"));
        config.splash.installer_command = Some("setup.sh".to_string());
        let mut state = AppState::default();
        state.settings = Arc::new(config);
        state
    }

    #[test]
    fn test_splash_advances_to_shelf() {
        let mut state = AppState::default();
        for _ in 0..19 {
            assert!(advance_splash(&mut state).is_none());
            assert_eq!(state.mode, AppMode::Splash);
        }
        assert!(advance_splash(&mut state).is_none());
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.dispatcher.is_visible());
    }

    #[test]
    fn test_splash_with_marker_checks_install_once() {
        let mut state = with_marker();
        let first = update(&mut state, &Action::SkipSplash);
        assert!(matches!(
            first,
            UpdateResult::Handled(Some(Command::CheckInstall { .. }))
        ));
        assert!(advance_splash(&mut state).is_none());
        assert!(matches!(
            update(&mut state, &Action::SkipSplash),
            UpdateResult::Handled(None)
        ));

        let launch = update(
            &mut state,
            &Action::InstallerRequired(Some("setup.sh".to_string())),
        );
        assert!(matches!(
            launch,
            UpdateResult::Handled(Some(Command::Launch { .. }))
        ));
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_cancel_closes_modals() {
        let mut state = AppState::default();
        state.open_shelf();
        state.mode = AppMode::Help;
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);

        state.focus = Focus::Grid;
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.focus, Focus::Sidebar);
    }
}
