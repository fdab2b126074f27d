use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{
        AppMode, AppState, BackgroundPickerState, ErrorSeverity, ErrorState, SystemMenuState,
    },
};
use crate::domain::models::LaunchSpec;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        // --- System Menu ---
        Action::OpenSystemMenu => {
            state.mode = AppMode::SystemMenu;
            state.system_menu = Some(SystemMenuState::default());
            UpdateResult::Handled(None)
        }
        Action::SystemMenuNext => {
            if let Some(menu) = &mut state.system_menu {
                menu.next();
            }
            UpdateResult::Handled(None)
        }
        Action::SystemMenuPrev => {
            if let Some(menu) = &mut state.system_menu {
                menu.prev();
            }
            UpdateResult::Handled(None)
        }
        Action::SystemMenuSelect => {
            let chosen = state.system_menu.as_ref().and_then(SystemMenuState::selected);
            match chosen {
                Some(action) => update(state, &Action::ChooseSystemAction(action)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::ChooseSystemAction(action) => {
            let menu = state.system_menu.get_or_insert_with(SystemMenuState::default);
            menu.pending = Some(*action);
            state.mode = AppMode::ConfirmSystem;
            UpdateResult::Handled(None)
        }
        Action::ConfirmSystemAction => {
            let pending = state.system_menu.take().and_then(|m| m.pending);
            state.mode = AppMode::Normal;
            let Some(action) = pending else {
                return UpdateResult::Handled(None);
            };

            let argv = state.settings.system_argv(action);
            if argv.is_empty() {
                state.push_notification(ErrorState::new(
                    format!("No command configured for {}", action.label()),
                    ErrorSeverity::Warning,
                ));
                return UpdateResult::Handled(None);
            }

            let spec = LaunchSpec::Exec {
                program: state.settings.privileged.helper.clone(),
                args: argv.to_vec(),
            };
            state.status_message = Some(format!("{}...", action.label()));
            UpdateResult::Handled(Some(
                state.dispatcher.launch(action.label().to_string(), spec),
            ))
        }

        // --- Background Picker ---
        Action::OpenBackgroundPicker => {
            state.mode = AppMode::BackgroundPicker;
            state.background_picker = Some(BackgroundPickerState {
                loading: true,
                ..Default::default()
            });
            UpdateResult::Handled(Some(Command::ListBackgrounds(
                state.settings.background.directory.clone(),
            )))
        }
        Action::BackgroundsListed(choices) => {
            if let Some(picker) = &mut state.background_picker {
                picker.choices.clone_from(choices);
                picker.selected_index = 0;
                picker.loading = false;
            }
            UpdateResult::Handled(None)
        }
        Action::BackgroundNext => {
            if let Some(picker) = &mut state.background_picker {
                picker.next();
            }
            UpdateResult::Handled(None)
        }
        Action::BackgroundPrev => {
            if let Some(picker) = &mut state.background_picker {
                picker.prev();
            }
            UpdateResult::Handled(None)
        }
        Action::BackgroundSelect => {
            let image = state
                .background_picker
                .take()
                .and_then(|p| p.selected().cloned());
            state.mode = AppMode::Normal;
            UpdateResult::Handled(image.map(|image| Command::SaveBackground {
                state_file: state.settings.background.state_file.clone(),
                image,
            }))
        }
        Action::BackgroundSaved(result) => {
            match result {
                Ok(path) => {
                    state.header.set_background(path);
                    state.status_message = Some("Background updated".to_string());
                }
                Err(e) => tracing::warn!("background not saved: {e}"),
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SystemAction;
    use std::path::PathBuf;

    fn state() -> AppState<'static> {
        let mut state = AppState::default();
        state.open_shelf();
        state
    }

    #[test]
    fn test_confirmed_action_runs_through_helper() {
        let mut state = state();
        update(&mut state, &Action::OpenSystemMenu);
        update(&mut state, &Action::SystemMenuNext); // Reboot
        update(&mut state, &Action::SystemMenuSelect);
        assert_eq!(state.mode, AppMode::ConfirmSystem);

        let UpdateResult::Handled(Some(Command::Launch { spec, .. })) =
            update(&mut state, &Action::ConfirmSystemAction)
        else {
            panic!("expected a launch");
        };
        assert_eq!(
            spec,
            LaunchSpec::Exec {
                program: "pkexec".to_string(),
                args: vec!["systemctl".to_string(), "reboot".to_string()],
            }
        );
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.system_menu.is_none());
    }

    #[test]
    fn test_unconfigured_action_warns() {
        let mut config = crate::config::Config::default();
        config.privileged.update.clear();
        let mut state = state();
        state.settings = std::sync::Arc::new(config);

        update(&mut state, &Action::ChooseSystemAction(SystemAction::Update));
        let result = update(&mut state, &Action::ConfirmSystemAction);
        assert!(matches!(result, UpdateResult::Handled(None)));
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.dispatcher.active_count(), 0);
    }

    #[test]
    fn test_background_pick_saves_choice() {
        let mut state = state();
        let result = update(&mut state, &Action::OpenBackgroundPicker);
        assert!(matches!(result, UpdateResult::Handled(Some(Command::ListBackgrounds(_)))));

        let choices = vec![PathBuf::from("/bg/a.png"), PathBuf::from("/bg/b.jpg")];
        update(&mut state, &Action::BackgroundsListed(choices));
        update(&mut state, &Action::BackgroundPrev);

        let UpdateResult::Handled(Some(Command::SaveBackground { image, .. })) =
            update(&mut state, &Action::BackgroundSelect)
        else {
            panic!("expected a save");
        };
        assert_eq!(image, PathBuf::from("/bg/b.jpg"));

        update(&mut state, &Action::BackgroundSaved(Ok(image)));
        assert_eq!(state.header.background_text.as_deref(), Some(" b.jpg "));
    }
}
