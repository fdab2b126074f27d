use crate::app::state::SystemMenuState;
use crate::domain::models::SystemAction;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect_fixed, draw_drop_shadow};

pub struct SystemMenuModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a SystemMenuState,
}

impl Widget for SystemMenuModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let actions = SystemAction::all();
        let menu_area = centered_rect_fixed(32, actions.len() as u16 + 2, area);
        if menu_area.width == 0 || menu_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, menu_area, area);
        Clear.render(menu_area, buf);

        let items: Vec<ListItem> = actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                if i == self.state.selected_index {
                    ListItem::new(format!("> {}", action.label())).style(self.theme.list_selected)
                } else {
                    ListItem::new(format!("  {}", action.label())).style(self.theme.list_item)
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(
                        format!(" {} SYSTEM ", glyphs::POWER),
                        self.theme.header_active,
                    ),
                    Span::raw(" "),
                ]))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_focus),
        );
        list.render(menu_area, buf);
    }
}
