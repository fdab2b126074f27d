use crate::domain::catalog::Catalog;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

/// Category list on the left of the shelf.
pub struct Sidebar<'a> {
    pub catalog: &'a Catalog,
    pub theme: &'a Theme,
}

impl StatefulWidget for Sidebar<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .catalog
            .as_categories()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let hotkey = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    "  ".to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(hotkey, self.theme.dimmed),
                    Span::raw(category.name.clone()),
                    Span::styled(format!(" ({})", category.entries.len()), self.theme.dimmed),
                ]))
                .style(self.theme.sidebar_item)
            })
            .collect();

        List::new(items)
            .highlight_style(self.theme.sidebar_selected)
            .highlight_symbol("▌")
            .render(area, buf, state);
    }
}
