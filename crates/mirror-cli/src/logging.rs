//! Log sinks: an append-only log file plus the console

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global tracing subscriber.
///
/// Every event is appended to `log_file` (created if missing, no ANSI colours)
/// and echoed to stdout. `RUST_LOG` takes precedence; otherwise the level is
/// `info`, or `debug` with `verbose`.
pub fn init(log_file: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| mirror_fs::Error::io(log_file, e))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(CliError::logging)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(verbose)
        .with_level(true);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(CliError::logging)?;

    Ok(())
}
