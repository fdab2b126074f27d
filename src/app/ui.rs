use crate::app::dispatcher::GridView;
use crate::app::state::{AppMode, AppState, Focus};
use crate::components::{
    app_grid::AppGrid, footer::Footer, header::Header, modals::ModalManager, sidebar::Sidebar,
    splash::Splash,
};
use crate::theme::{glyphs, Theme};

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 24;
const SEARCH_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub search: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// The grid area without its border; cells are laid out in here.
    #[must_use]
    pub fn grid_inner(&self) -> Rect {
        self.grid.inner(Margin::new(1, 1))
    }
}

pub fn get_layout(area: Rect, search_visible: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if search_visible { SEARCH_HEIGHT } else { 0 }),
            Constraint::Min(0),
        ])
        .split(body[1]);

    AppLayout {
        header: main[0],
        sidebar: body[0],
        search: right[0],
        grid: right[1],
        footer: main[2],
    }
}

fn panel_block<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

fn grid_title(view: &GridView) -> String {
    match view {
        GridView::Hidden => "APPLICATIONS".to_string(),
        GridView::Category(name) => name.to_uppercase(),
        GridView::Search(text) => format!("{} RESULTS FOR '{text}'", glyphs::SEARCH),
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = app_state.theme.clone();

    if app_state.mode == AppMode::Splash {
        f.render_widget(
            Splash {
                progress: app_state.splash_progress,
                theme: &theme,
            },
            area,
        );
        return;
    }

    let layout = get_layout(area, app_state.search.is_some());

    // --- Header ---
    f.render_widget(
        Header {
            state: &app_state.header,
            theme: &theme,
        },
        layout.header,
    );

    // --- Sidebar ---
    if layout.sidebar.width > 0 && layout.sidebar.height > 0 {
        let block = panel_block(
            "CATEGORIES".to_string(),
            app_state.focus == Focus::Sidebar && app_state.search.is_none(),
            &theme,
        );
        let inner = block.inner(layout.sidebar);
        f.render_widget(block, layout.sidebar);
        f.render_stateful_widget(
            Sidebar {
                catalog: app_state.dispatcher.catalog(),
                theme: &theme,
            },
            inner,
            &mut app_state.sidebar,
        );
    }

    // --- Search bar ---
    if let Some(search) = &app_state.search {
        if layout.search.height > 0 {
            let block = panel_block(
                format!("{} SEARCH", glyphs::SEARCH),
                app_state.mode == AppMode::Search,
                &theme,
            );
            let inner = block.inner(layout.search);
            f.render_widget(block, layout.search);
            f.render_widget(&search.text_area, inner);
        }
    }

    // --- Grid ---
    if layout.grid.width > 0 && layout.grid.height > 0 {
        let focused = app_state.focus == Focus::Grid;
        let block = panel_block(grid_title(app_state.dispatcher.view()), focused, &theme)
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", theme.footer_segment_key),
                Span::raw(": launch "),
                Span::styled("/", theme.footer_segment_key),
                Span::raw(": search "),
            ]));
        f.render_widget(block, layout.grid);
        f.render_widget(
            AppGrid {
                dispatcher: &app_state.dispatcher,
                theme: &theme,
                focused,
            },
            layout.grid_inner(),
        );
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_layout_reserves_search_bar_only_when_visible() {
        let area = Rect::new(0, 0, 100, 30);
        let closed = get_layout(area, false);
        assert_eq!(closed.search.height, 0);
        assert_eq!(closed.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(closed.grid.y, 1);
        assert_eq!(closed.footer.y, 29);

        let open = get_layout(area, true);
        assert_eq!(open.search.height, SEARCH_HEIGHT);
        assert_eq!(open.grid.y, 1 + SEARCH_HEIGHT);
        assert_eq!(open.grid_inner().x, SIDEBAR_WIDTH + 1);
    }

    #[test]
    fn test_draws_splash_then_shelf() {
        let mut state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen_text(&terminal).contains("any key"));

        state.open_shelf();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("CATEGORIES"));
        assert!(text.contains("APEX TOOLS"));
        assert!(text.contains("Apex Recovery"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        state.open_shelf();
        state.mode = AppMode::Help;
        for (w, h) in [(1, 1), (5, 3), (20, 4), (30, 10)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &mut state)).unwrap();
        }
    }
}
