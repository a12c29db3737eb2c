//! File logging. The terminal belongs to the TUI, so nothing is written to
//! stdout or stderr once the app is running.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TEAMWHEEL_LOG";

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost. Returns `None` when no log directory is usable.
pub fn init() -> Option<WorkerGuard> {
    let dir = dirs::data_local_dir()?.join("teamwheel").join("logs");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "teamwheel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
