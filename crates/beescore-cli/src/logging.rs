//! File logging setup.
//!
//! Logs go to a daily-rolling file under `${BEESCORE_HOME}/logs`. The filter
//! is read from the `BEESCORE_LOG` env var (tracing `EnvFilter` syntax).

use beescore_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging. Returns the guard that flushes buffered logs on
/// drop, or `None` if the log directory could not be created.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = paths::log_dir();
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let filter = EnvFilter::try_from_env("BEESCORE_LOG").unwrap_or_else(|_| {
        EnvFilter::new("beescore=info,beescore_core=info,beescore_tui=info")
    });
    let appender = tracing_appender::rolling::daily(log_dir, "beescore.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Some(guard)
}
