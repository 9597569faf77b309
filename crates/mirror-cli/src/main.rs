//! Folder mirror CLI
//!
//! Keeps a replica folder identical to a source folder by running a mirroring
//! pass at a fixed interval.

mod cli;
mod error;
mod logging;
mod schedule;

use clap::Parser;
use colored::Colorize;
use mirror_core::{MirrorConfig, MirrorEngine, Settings, TracingLogger};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file_config = cli
        .config
        .as_deref()
        .map(MirrorConfig::load)
        .transpose()?;
    let settings = Settings::resolve(cli.overrides(), file_config)?;

    logging::init(&settings.log_file, cli.verbose)?;
    tracing::debug!(
        source = %settings.source.display(),
        replica = %settings.replica.display(),
        interval_secs = settings.interval_secs,
        "Starting mirror"
    );

    let engine = MirrorEngine::new(&settings.source, &settings.replica);
    let limit = cli.once.then_some(1);

    schedule::run(
        &engine,
        settings.interval(),
        limit,
        &TracingLogger,
        std::thread::sleep,
    )
    .inspect_err(|e| tracing::error!("{}", e))
}
