use crate::app::command::Command;
use crate::app::recovery;
use crate::app::state::{ErrorSeverity, ErrorState};
use crate::domain::catalog::Catalog;
use crate::domain::models::{
    CatalogEntry, EntrySource, GridCell, LaunchId, LaunchOutcome, LaunchSpec,
};
use crate::infrastructure::icons::IconCache;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Hidden,
    Category(String),
    Search(String),
}

/// A subprocess tracked from spawn until its completion is reported.
#[derive(Debug)]
pub struct ActiveLaunch {
    pub id: LaunchId,
    pub display_name: String,
    pub command: String,
    pub started_at: Instant,
    terminate: Option<oneshot::Sender<()>>,
}

/// Renders catalog entries into a fixed-width grid and launches them.
///
/// The dispatcher owns every cell it renders and the set of in-flight
/// launches. It only mutates on the event-loop task, so nothing here locks.
#[derive(Debug)]
pub struct Dispatcher {
    catalog: Arc<Catalog>,
    icons: Arc<IconCache>,
    columns: usize,
    view: GridView,
    cells: Vec<GridCell>,
    selected: usize,
    active: BTreeMap<LaunchId, ActiveLaunch>,
    next_id: u64,
}

impl Dispatcher {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, icons: Arc<IconCache>, columns: usize) -> Self {
        Self {
            catalog,
            icons,
            columns: columns.max(1),
            view: GridView::Hidden,
            cells: Vec::new(),
            selected: 0,
            active: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn view(&self) -> &GridView {
        &self.view
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.view != GridView::Hidden
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.columns)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(self.columns)
    }

    fn cell_for(&self, entry: &CatalogEntry, source: EntrySource) -> GridCell {
        GridCell {
            entry: entry.clone(),
            icon: self.icons.get(&entry.icon_ref),
            source,
        }
    }

    /// Replaces the grid with the entries of `category`, in catalog order.
    pub fn render(&mut self, category: &str) {
        let source = EntrySource::Catalog(category.to_string());
        self.cells = self
            .catalog
            .lookup(category)
            .iter()
            .map(|e| self.cell_for(e, source.clone()))
            .collect();
        self.selected = 0;
        self.view = GridView::Category(category.to_string());
        tracing::debug!(category, cells = self.cells.len(), "rendered category");
    }

    pub fn hide(&mut self) {
        self.cells.clear();
        self.selected = 0;
        self.view = GridView::Hidden;
    }

    /// Renders catalog matches for `text` and asks for installed
    /// applications to be scanned. Empty text hides the grid.
    pub fn search(&mut self, text: &str) -> Option<Command> {
        if text.is_empty() {
            self.hide();
            return None;
        }

        self.cells = self
            .catalog
            .search(text)
            .into_iter()
            .map(|(category, e)| self.cell_for(e, EntrySource::Catalog(category.to_string())))
            .collect();
        self.selected = 0;
        self.view = GridView::Search(text.to_string());
        Some(Command::ScanInstalled(text.to_string()))
    }

    /// Appends installed-application matches for `query`. Results for a
    /// query that is no longer active are dropped, as are entries whose name
    /// is already on the grid (case-insensitive).
    pub fn append_installed(&mut self, query: &str, found: Vec<GridCell>) -> usize {
        if self.view != GridView::Search(query.to_string()) {
            return 0;
        }

        let mut seen: HashSet<String> = self
            .cells
            .iter()
            .map(|c| c.entry.display_name.to_lowercase())
            .collect();

        let before = self.cells.len();
        for mut cell in found {
            if seen.insert(cell.entry.display_name.to_lowercase()) {
                cell.source = EntrySource::Installed;
                self.cells.push(cell);
            }
        }
        self.cells.len() - before
    }

    // --- Selection ---

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_cell(&self) -> Option<&GridCell> {
        self.cells.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.cells.len() {
            self.selected = index;
        }
    }

    pub fn move_by(&mut self, delta_col: isize, delta_row: isize) {
        if self.cells.is_empty() {
            return;
        }
        let cols = self.columns as isize;
        let target = self.selected as isize + delta_row * cols + delta_col;
        let last = self.cells.len() as isize - 1;
        if delta_row != 0 && !(0..=last).contains(&target) {
            // Vertical moves stop at the grid edge instead of wrapping.
            return;
        }
        self.selected = target.clamp(0, last) as usize;
    }

    // --- Launching ---

    /// Starts the cell at `index`.
    pub fn activate(&mut self, index: usize) -> Option<Command> {
        let cell = self.cells.get(index)?;
        let name = cell.entry.display_name.clone();
        let spec = LaunchSpec::Shell(cell.entry.command.clone());
        Some(self.launch(name, spec))
    }

    /// Registers a new active launch and returns the command that runs it.
    pub fn launch(&mut self, display_name: String, spec: LaunchSpec) -> Command {
        let id = LaunchId(self.next_id);
        self.next_id += 1;
        let (terminate_tx, terminate_rx) = oneshot::channel();

        tracing::info!(%id, name = %display_name, command = %spec, "launching");
        self.active.insert(
            id,
            ActiveLaunch {
                id,
                display_name,
                command: spec.to_string(),
                started_at: Instant::now(),
                terminate: Some(terminate_tx),
            },
        );

        Command::Launch {
            id,
            spec,
            terminate: terminate_rx,
        }
    }

    /// Removes a finished launch. Returns the notification to show when it
    /// failed.
    pub fn finish(&mut self, id: LaunchId, outcome: LaunchOutcome) -> Option<ErrorState> {
        let Some(launch) = self.active.remove(&id) else {
            tracing::warn!(%id, "completion for unknown launch");
            return None;
        };

        tracing::info!(
            %id,
            name = %launch.display_name,
            elapsed_ms = launch.started_at.elapsed().as_millis() as u64,
            "{}",
            outcome.describe()
        );

        if !outcome.is_failure() {
            return None;
        }

        Some(ErrorState {
            message: format!("{} {}", launch.display_name, outcome.describe()),
            timestamp: chrono::Local::now(),
            severity: ErrorSeverity::Error,
            suggestions: recovery::get_suggestions(&outcome, &launch.command),
        })
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_launches(&self) -> impl Iterator<Item = &ActiveLaunch> {
        self.active.values()
    }

    /// Asks every active launch to terminate. Launches stay in the set until
    /// their completion arrives; returns how many were signalled.
    pub fn shutdown(&mut self) -> usize {
        let mut signalled = 0;
        for launch in self.active.values_mut() {
            if let Some(tx) = launch.terminate.take() {
                // A closed channel means the task already finished and its
                // completion is queued.
                let _ = tx.send(());
                signalled += 1;
            }
        }
        signalled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Category;

    fn catalog_with(n: usize) -> Arc<Catalog> {
        let entries = (0..n)
            .map(|i| CatalogEntry::new(format!("App {i}"), format!("app{i}"), ""))
            .collect();
        Arc::new(Catalog::new(vec![
            Category {
                name: "Many".to_string(),
                entries,
            },
            Category {
                name: "Music".to_string(),
                entries: vec![CatalogEntry::new("VLC", "vlc", "vlc")],
            },
        ]))
    }

    fn dispatcher(n: usize) -> Dispatcher {
        Dispatcher::new(catalog_with(n), Arc::new(IconCache::default()), 5)
    }

    #[test]
    fn test_render_wraps_at_column_count() {
        let mut d = dispatcher(7);
        d.render("Many");
        let rows: Vec<usize> = d.rows().map(<[GridCell]>::len).collect();
        assert_eq!(rows, vec![5, 2]);
        let names: Vec<_> = d.cells().iter().map(|c| c.entry.display_name.clone()).collect();
        assert_eq!(names[0], "App 0");
        assert_eq!(names[6], "App 6");
    }

    #[test]
    fn test_render_replaces_previous_cells() {
        let mut d = dispatcher(7);
        d.render("Many");
        d.render("Music");
        assert_eq!(d.cells().len(), 1);
        assert_eq!(d.view(), &GridView::Category("Music".to_string()));
    }

    #[test]
    fn test_render_unknown_category_is_empty() {
        let mut d = dispatcher(3);
        d.render("Nope");
        assert!(d.cells().is_empty());
        assert_eq!(d.row_count(), 0);
    }

    #[test]
    fn test_empty_search_hides_grid() {
        let mut d = dispatcher(3);
        d.render("Many");
        assert!(d.search("").is_none());
        assert!(d.cells().is_empty());
        assert!(!d.is_visible());
    }

    #[test]
    fn test_search_matches_case_insensitively() {
        let mut d = dispatcher(3);
        let cmd = d.search("vlc");
        assert!(matches!(cmd, Some(Command::ScanInstalled(q)) if q == "vlc"));
        assert_eq!(d.cells().len(), 1);
        assert_eq!(d.cells()[0].entry.display_name, "VLC");
    }

    #[test]
    fn test_installed_results_dedup_and_staleness() {
        let mut d = dispatcher(3);
        d.search("vlc");
        let found = vec![
            GridCell {
                entry: CatalogEntry::new("vlc", "vlc %U", "vlc"),
                icon: "vlc".into(),
                source: EntrySource::Installed,
            },
            GridCell {
                entry: CatalogEntry::new("VLC Skins", "vlc-skins", ""),
                icon: "".into(),
                source: EntrySource::Installed,
            },
        ];

        assert_eq!(d.append_installed("old query", found.clone()), 0);
        assert_eq!(d.append_installed("vlc", found), 1);
        assert_eq!(d.cells().len(), 2);
        assert_eq!(d.cells()[1].source, EntrySource::Installed);
    }

    #[test]
    fn test_move_by_stays_in_grid() {
        let mut d = dispatcher(7);
        d.render("Many");
        d.move_by(0, 1);
        assert_eq!(d.selected(), 5);
        d.move_by(0, 1);
        assert_eq!(d.selected(), 5);
        d.move_by(1, 0);
        assert_eq!(d.selected(), 6);
        d.move_by(1, 0);
        assert_eq!(d.selected(), 6);
        d.move_by(0, -1);
        assert_eq!(d.selected(), 1);
    }

    #[test]
    fn test_failed_launch_yields_one_notification() {
        let mut d = dispatcher(2);
        d.render("Music");
        let Some(Command::Launch { id, spec, .. }) = d.activate(0) else {
            panic!("expected a launch");
        };
        assert_eq!(spec, LaunchSpec::Shell("vlc".to_string()));
        assert_eq!(d.active_count(), 1);

        let err = d.finish(id, LaunchOutcome::Exited(1)).expect("notification");
        assert!(err.message.contains("VLC"));
        assert_eq!(d.active_count(), 0);
        assert!(d.finish(id, LaunchOutcome::Exited(1)).is_none());
    }

    #[test]
    fn test_successful_launch_is_silent() {
        let mut d = dispatcher(2);
        d.render("Music");
        let Some(Command::Launch { id, .. }) = d.activate(0) else {
            panic!("expected a launch");
        };
        assert!(d.finish(id, LaunchOutcome::Exited(0)).is_none());
        assert_eq!(d.active_count(), 0);
    }

    #[test]
    fn test_shutdown_signals_every_launch() {
        let mut d = dispatcher(3);
        d.render("Many");
        let mut receivers = Vec::new();
        for i in 0..3 {
            if let Some(Command::Launch { terminate, .. }) = d.activate(i) {
                receivers.push(terminate);
            }
        }

        assert_eq!(d.shutdown(), 3);
        for mut rx in receivers {
            assert!(rx.try_recv().is_ok());
        }
        // Still tracked until completions arrive.
        assert_eq!(d.active_count(), 3);
        assert_eq!(d.shutdown(), 0);
    }
}
