use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::background_picker::BackgroundPickerModal;
use super::confirm::ConfirmModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::system_menu::SystemMenuModal;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;

        // --- Visual Dimming ---
        let is_modal_active = matches!(
            state.mode,
            AppMode::Help | AppMode::SystemMenu | AppMode::ConfirmSystem | AppMode::BackgroundPicker
        ) || state.current_notification().is_some();

        if is_modal_active {
            dim_area(buf, area);
        }

        // --- Modals ---
        match state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::SystemMenu => {
                if let Some(menu) = &state.system_menu {
                    SystemMenuModal {
                        theme: self.theme,
                        state: menu,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ConfirmSystem => {
                if let Some(action) = state.system_menu.as_ref().and_then(|m| m.pending) {
                    let argv = state.settings.system_argv(action);
                    let command = std::iter::once(state.settings.privileged.helper.as_str())
                        .chain(argv.iter().map(String::as_str))
                        .collect::<Vec<_>>()
                        .join(" ");
                    ConfirmModal {
                        theme: self.theme,
                        action,
                        command,
                    }
                    .render(area, buf);
                }
            }
            AppMode::BackgroundPicker => {
                if let Some(picker) = &state.background_picker {
                    BackgroundPickerModal {
                        theme: self.theme,
                        state: picker,
                    }
                    .render(area, buf);
                }
            }
            _ => {}
        }

        // --- Notifications ---
        if let Some(error) = state.current_notification() {
            ErrorModal {
                theme: self.theme,
                error,
                queued: state.notifications.len().saturating_sub(1),
            }
            .render(area, buf);
        }
    }
}
