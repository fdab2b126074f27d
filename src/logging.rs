use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHELF_LOG";
pub const LOG_FILE: &str = "shelf.log";

/// Sends all tracing output to `log_dir/shelf.log`. The terminal is in raw
/// mode while the shelf runs, so nothing is written to stdout or stderr.
///
/// The filter comes from `SHELF_LOG` when set, otherwise `default_level`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(log_dir: &Path, default_level: &str) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(err) = std::fs::create_dir_all(log_dir) {
        eprintln!("shelf: file logging disabled ({}): {err}", log_dir.display());
        return None;
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .compact()
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok();

    Some(guard)
}
