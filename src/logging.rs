use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialises file-backed logging and returns the appender guard; the
/// caller holds it for the process lifetime so buffered lines flush on
/// exit. Nothing is ever written to stdout or stderr, the terminal belongs
/// to the frontend.
///
/// `RUST_LOG` can refine the filter, but only once `--debug` opted in;
/// without it the level stays pinned at `info` regardless of environment.
pub fn init(path: &Path, debug: bool) -> Option<WorkerGuard> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let dir = path.parent()?;
    let file_name = path.file_name()?;
    std::fs::create_dir_all(dir).ok()?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
