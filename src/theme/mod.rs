use ratatui::style::{Modifier, Style};

pub mod apex;
pub mod glyphs;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_clock: Style,
    pub header_stats: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub sidebar_item: Style,
    pub sidebar_selected: Style,

    pub cell: Style,
    pub cell_selected: Style,
    pub cell_name: Style,
    pub cell_icon: Style,
    pub cell_source: Style,

    pub splash_title: Style,
    pub gauge: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.gold),

            header_logo: Style::default()
                .bg(p.gold)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_clock: Style::default()
                .bg(p.teal)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext1),
            header_item: Style::default().bg(p.surface1).fg(p.gold),
            header_active: Style::default()
                .bg(p.gold)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.teal)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.gold)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            sidebar_item: Style::default().fg(p.subtext1),
            sidebar_selected: Style::default()
                .bg(p.surface1)
                .fg(p.gold)
                .add_modifier(Modifier::BOLD),

            cell: Style::default().bg(p.base),
            cell_selected: Style::default().bg(dim_color(p.gold, 0.25)),
            cell_name: Style::default().fg(p.gold).add_modifier(Modifier::BOLD),
            cell_icon: Style::default().fg(p.overlay0),
            cell_source: Style::default().fg(p.teal).add_modifier(Modifier::ITALIC),

            splash_title: Style::default().fg(p.teal).add_modifier(Modifier::BOLD),
            gauge: Style::default().fg(p.teal).bg(p.mantle),

            list_selected: Style::default()
                .bg(p.gold)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&apex::APEX)
    }
}
