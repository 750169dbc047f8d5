//! File logging for the CLI.
//!
//! Logs go to a rolling daily file under the data directory so stdout stays
//! clean for board output. The returned guard must live for the whole
//! process or buffered lines are lost on exit.

use presence_core::DataPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init(paths: &DataPaths) -> Option<WorkerGuard> {
    let dir = paths.logs_dir();
    if fs_err::create_dir_all(&dir).is_err() {
        // Logging is non-critical; the CLI still works without it.
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, "pulseboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
