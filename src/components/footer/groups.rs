use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, Focus};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.current_notification().is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Normal => {
            let mut groups = vec![FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("hjkl", "move"),
                    FooterItem::new("Tab", "focus").highlighted(state.focus == Focus::Grid),
                    FooterItem::new("1-9", "category"),
                ],
            }];
            groups.push(FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new("Enter", "launch"),
                    FooterItem::new("/", "search").highlighted(state.search.is_some()),
                ],
            });
            groups.push(FooterGroup {
                name: "SYS",
                items: vec![
                    FooterItem::new("b", "background"),
                    FooterItem::new("x", "system"),
                    FooterItem::new("?", "help"),
                    FooterItem::new("q", "quit"),
                ],
            });
            groups
        }
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                FooterItem::new("Enter", "open / run"),
                FooterItem::new("↑↓", "move"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::SystemMenu | AppMode::BackgroundPicker => vec![FooterGroup {
            name: "MENU",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("Enter", "choose"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::ConfirmSystem => vec![FooterGroup {
            name: "CONFIRM",
            items: vec![
                FooterItem::new("y/Enter", "yes"),
                FooterItem::new("n/Esc", "no"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
        AppMode::Splash | AppMode::Quitting => Vec::new(),
    }
}
