use crate::app::dispatcher::{Dispatcher, GridView};
use crate::domain::models::{EntrySource, GridCell};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Terminal rows used by one grid cell.
pub const CELL_HEIGHT: u16 = 4;

#[must_use]
pub fn visible_rows(area: Rect) -> usize {
    usize::from((area.height / CELL_HEIGHT).max(1))
}

/// First grid row on screen, chosen so the selected row stays visible.
#[must_use]
pub fn scroll_offset(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let row = selected / columns.max(1);
    row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Maps a terminal position inside `area` to a cell index.
#[must_use]
pub fn cell_at(area: Rect, columns: usize, first_row: usize, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() || columns == 0 {
        return None;
    }
    let cell_width = area.width / columns as u16;
    if cell_width == 0 {
        return None;
    }
    let col = usize::from((x - area.x) / cell_width);
    if col >= columns {
        return None;
    }
    let row = usize::from((y - area.y) / CELL_HEIGHT) + first_row;
    Some(row * columns + col)
}

pub struct AppGrid<'a> {
    pub dispatcher: &'a Dispatcher,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl AppGrid<'_> {
    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let message = match self.dispatcher.view() {
            GridView::Hidden => "Type to search the shelf".to_string(),
            GridView::Category(name) => format!("Nothing in {name}"),
            GridView::Search(text) => format!("No matches for '{text}'. Enter runs it as a command."),
        };
        let y = area.y + area.height / 2;
        Paragraph::new(Line::from(Span::styled(message, self.theme.dimmed)))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }

    fn render_cell(&self, cell: &GridCell, area: Rect, selected: bool, buf: &mut Buffer) {
        let base = if selected {
            self.theme.cell_selected
        } else {
            self.theme.cell
        };
        buf.set_style(area, base);

        let (glyph, detail) = match &cell.source {
            EntrySource::Installed => (glyphs::INSTALLED, "installed".to_string()),
            EntrySource::Catalog(_) => (
                glyphs::APP,
                cell.icon
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            ),
        };

        let name_style = if selected && self.focused {
            self.theme.cell_name.patch(self.theme.header_active)
        } else {
            self.theme.cell_name
        };

        let lines = vec![
            Line::from(Span::styled(glyph, self.theme.cell_icon)),
            Line::from(Span::styled(cell.entry.display_name.clone(), name_style)),
            Line::from(Span::styled(detail, self.theme.cell_source)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(base)
            .render(area, buf);
    }
}

impl Widget for AppGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let cells = self.dispatcher.cells();
        if cells.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let columns = self.dispatcher.columns();
        let cell_width = area.width / columns as u16;
        if cell_width == 0 {
            return;
        }
        let rows_on_screen = visible_rows(area);
        let first_row = scroll_offset(self.dispatcher.selected(), columns, rows_on_screen);

        for (screen_row, row) in self
            .dispatcher
            .rows()
            .skip(first_row)
            .take(rows_on_screen)
            .enumerate()
        {
            let y = area.y + screen_row as u16 * CELL_HEIGHT;
            let height = CELL_HEIGHT.min(area.bottom().saturating_sub(y)).saturating_sub(1);
            if height == 0 {
                break;
            }
            for (col, cell) in row.iter().enumerate() {
                let index = (first_row + screen_row) * columns + col;
                let rect = Rect::new(
                    area.x + col as u16 * cell_width,
                    y,
                    cell_width.saturating_sub(1),
                    height,
                );
                if rect.width == 0 {
                    continue;
                }
                self.render_cell(cell, rect, index == self.dispatcher.selected(), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Category};
    use crate::domain::models::CatalogEntry;
    use crate::infrastructure::icons::IconCache;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    #[test]
    fn test_cell_hit_testing() {
        let area = Rect::new(10, 5, 50, 12);
        assert_eq!(cell_at(area, 5, 0, 10, 5), Some(0));
        assert_eq!(cell_at(area, 5, 0, 21, 5), Some(1));
        assert_eq!(cell_at(area, 5, 0, 10, 9), Some(5));
        assert_eq!(cell_at(area, 5, 2, 10, 5), Some(10));
        assert_eq!(cell_at(area, 5, 0, 9, 5), None);
        assert_eq!(cell_at(area, 5, 0, 10, 17), None);
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(3, 5, 2), 0);
        assert_eq!(scroll_offset(12, 5, 2), 1);
        assert_eq!(scroll_offset(12, 5, 1), 2);
    }

    #[test]
    fn test_renders_names_in_rows() {
        let entries = (0..7)
            .map(|i| CatalogEntry::new(format!("App{i}"), "true", ""))
            .collect();
        let catalog = Catalog::new(vec![Category {
            name: "Many".to_string(),
            entries,
        }]);
        let mut dispatcher = Dispatcher::new(Arc::new(catalog), Arc::new(IconCache::default()), 5);
        dispatcher.render("Many");

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    AppGrid {
                        dispatcher: &dispatcher,
                        theme: &theme,
                        focused: true,
                    },
                    f.area(),
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("App0") && row(1).contains("App4"));
        assert!(row(5).contains("App5") && row(5).contains("App6"));
    }
}
