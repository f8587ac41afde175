use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Initialize the global tracing subscriber to append to `path`.
///
/// The terminal is owned by the UI while the app runs, so stderr is not a
/// useful sink; without a log file tracing simply stays uninitialized.
/// Safe to call multiple times; subsequent calls are no-ops for the
/// global subscriber.
pub fn init_file(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
