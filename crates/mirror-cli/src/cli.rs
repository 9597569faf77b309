//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use mirror_core::MirrorConfig;

/// Mirror a source folder onto a replica folder at a fixed interval
///
/// Every pass copies new and changed files from SOURCE to REPLICA and deletes
/// anything in REPLICA that is no longer in SOURCE. Each change is logged to
/// LOG_FILE and echoed to the console.
///
/// Examples:
///   mirror ./data ./backup mirror.log            # Every 5 seconds
///   mirror ./data ./backup mirror.log -i 60      # Every minute
///   mirror --config mirror.toml --once           # Single pass from a config file
#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the source folder
    #[arg(required_unless_present = "config")]
    pub source: Option<PathBuf>,

    /// The path to the replica folder
    #[arg(required_unless_present = "config")]
    pub replica: Option<PathBuf>,

    /// The log file to append to
    #[arg(required_unless_present = "config")]
    pub log_file: Option<PathBuf>,

    /// Seconds between passes [default: 5]
    #[arg(
        short,
        long,
        env = "MIRROR_INTERVAL",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: Option<u64>,

    /// Read settings from a TOML, JSON or YAML file; arguments override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Values given on the command line, as a config layer.
    pub fn overrides(&self) -> MirrorConfig {
        MirrorConfig {
            source: self.source.clone(),
            replica: self.replica.clone(),
            log_file: self.log_file.clone(),
            interval_secs: self.interval,
        }
    }
}
