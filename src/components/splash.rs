use crate::config::VERSION_LABEL;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

pub struct Splash<'a> {
    pub progress: u16,
    pub theme: &'a Theme,
}

impl Widget for Splash<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_ascii = [
            r"     _          _  __ ",
            r"    | |        | |/ _|",
            r" ___| |__   ___| | |_ ",
            r"/ __| '_ \ / _ \ |  _|",
            r"\__ \ | | |  __/ | |  ",
            r"|___/_| |_|\___|_|_|  ",
        ];

        let mut lines: Vec<Line> = logo_ascii
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.splash_title)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(VERSION_LABEL, self.theme.dimmed)));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled(" any key ", self.theme.footer_segment_key),
            Span::raw(" to skip"),
        ]));

        let text_height = lines.len() as u16;
        let block_height = text_height + 2;
        let top = (area.y + area.height / 2).saturating_sub(block_height / 2);

        let text_area = Rect {
            x: area.x,
            y: top,
            width: area.width,
            height: text_height.min(area.bottom().saturating_sub(top)),
        };
        if text_area.width > 0 && text_area.height > 0 {
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(text_area, buf);
        }

        let gauge_width = area.width.min(50);
        let gauge_area = Rect {
            x: area.x + (area.width - gauge_width) / 2,
            y: top + text_height + 1,
            width: gauge_width,
            height: 1,
        };
        if gauge_area.width > 0 && gauge_area.y < area.bottom() {
            Gauge::default()
                .gauge_style(self.theme.gauge)
                .percent(self.progress.min(100))
                .label(format!("Loading {}%", self.progress.min(100)))
                .render(gauge_area, buf);
        }
    }
}
