use crate::app::state::HeaderState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a HeaderState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let clock_bg = self.theme.header_clock.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(format!(" {} SHELF ", glyphs::SHELF), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(clock_bg)),
            Span::styled(
                format!(" {}{}", glyphs::CLOCK, self.state.clock_text),
                self.theme.header_clock,
            ),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(clock_bg).bg(stats_bg)),
            Span::styled(
                format!(" {}{}", glyphs::STATS, self.state.stats_text),
                self.theme.header_stats,
            ),
        ];

        match &self.state.background_text {
            Some(background) => {
                spans.push(Span::styled(
                    glyphs::SEP_RIGHT,
                    Style::default().fg(stats_bg).bg(item_bg),
                ));
                spans.push(Span::styled(
                    format!(" {}{background}", glyphs::IMAGE),
                    self.theme.header_item,
                ));
                spans.push(Span::styled(
                    glyphs::SEP_RIGHT,
                    Style::default().fg(item_bg).bg(base_bg),
                ));
            }
            None => spans.push(Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(stats_bg).bg(base_bg),
            )),
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
