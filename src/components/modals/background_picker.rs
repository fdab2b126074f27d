use crate::app::state::BackgroundPickerState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct BackgroundPickerModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a BackgroundPickerState,
}

impl Widget for BackgroundPickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 50, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} BACKGROUND ", glyphs::IMAGE),
                    self.theme.header_active,
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        if self.state.loading || self.state.choices.is_empty() {
            let message = if self.state.loading {
                "Looking for images..."
            } else {
                "No images found"
            };
            Paragraph::new(Line::from(Span::styled(
                message,
                self.theme.list_item.add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center)
            .render(inner_area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .choices
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                ListItem::new(format!("  {name}")).style(self.theme.list_item)
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.state.selected_index));
        StatefulWidget::render(
            List::new(items).highlight_style(self.theme.list_selected),
            inner_area,
            buf,
            &mut list_state,
        );
    }
}
