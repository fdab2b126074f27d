use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use shelf::app::{dispatcher::Dispatcher, persistence, r#loop::run_loop, state::AppState};
use shelf::config::{self, Config};
use shelf::domain::launcher::Collaborators;
use shelf::infrastructure::{
    desktop_entries::FsDesktopScanner,
    icons::{FsIconResolver, IconCache},
    process::TokioLauncher,
    stats::ProcStatsProbe,
};

/// Terminal application shelf: browse categories and launch programs.
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    /// Config file to use instead of ~/.config/shelf/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Open the shelf straight away
    #[arg(long)]
    no_splash: bool,

    /// Category to show first
    #[arg(long)]
    category: Option<String>,

    /// Log filter used when SHELF_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Everything that can fail on bad input happens BEFORE terminal setup so
    // an error never leaves the terminal in raw mode.
    let mut settings = Config::load(cli.config.as_deref())?;
    if cli.dump_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }
    if cli.no_splash {
        settings.splash.enabled = false;
    }

    let _log_guard = shelf::logging::init(&config::get_log_dir(), &cli.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting shelf");

    let settings = Arc::new(settings);
    let catalog = Arc::new(settings.build_catalog());
    if catalog.is_empty() {
        tracing::warn!("catalog has no categories");
    }

    let resolver = Arc::new(FsIconResolver::new(
        settings.icons.search_dirs.clone(),
        settings.icons.default.clone(),
    ));
    let icons = {
        let catalog = catalog.clone();
        let resolver = resolver.clone();
        Arc::new(
            tokio::task::spawn_blocking(move || IconCache::build(&catalog, resolver.as_ref()))
                .await?,
        )
    };

    let collaborators = Collaborators {
        launcher: Arc::new(TokioLauncher::with_hooks(
            settings.launch.before.clone(),
            settings.launch.after.clone(),
        )),
        scanner: Arc::new(FsDesktopScanner::new(settings.applications_dir.clone())),
        icons: resolver,
        stats: Arc::new(ProcStatsProbe::default()),
    };

    let dispatcher = Dispatcher::new(catalog, icons, settings.grid.columns);
    let mut app_state = AppState::new(settings.clone(), dispatcher);
    if let Some(category) = &cli.category {
        app_state.select_category_named(category);
    }
    if let Some(background) = persistence::load_background(&settings.background.state_file) {
        app_state.header.set_background(&background);
    }

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, collaborators).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("shelf exited with an error: {err:#}");
        eprintln!("{err:?}");
    }

    tracing::info!("bye");
    Ok(())
}
