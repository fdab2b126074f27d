use crate::domain::models::SystemAction;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Asks before running a privileged system action.
pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub action: SystemAction,
    /// The command line that will run, shown verbatim.
    pub command: String,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", self.action.label().to_uppercase()),
                    self.theme.header_active,
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.status_warn);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}?", self.action.label()),
                self.theme.footer_segment_val,
            )),
            Line::from(Span::styled(self.command, self.theme.dimmed)),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", self.theme.footer_segment_key),
                Span::raw(" confirm  "),
                Span::styled("n", self.theme.footer_segment_key),
                Span::raw(" cancel"),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
