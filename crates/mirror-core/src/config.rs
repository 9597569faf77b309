//! Mirror settings: config file values merged with command-line overrides

use std::path::{Path, PathBuf};

use mirror_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Seconds between passes when neither the command line nor the config file
/// says otherwise.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Settings as they appear in a config file (TOML, JSON or YAML).
///
/// Every field is optional so a file can supply only part of the settings and
/// leave the rest to the command line.
///
/// ```toml
/// source = "/data/source"
/// replica = "/backup/replica"
/// log_file = "/var/log/mirror.log"
/// interval_secs = 60
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorConfig {
    pub source: Option<PathBuf>,
    pub replica: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub interval_secs: Option<u64>,
}

impl MirrorConfig {
    /// Load a config file; the format follows the extension.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Layer `overrides` on top of `self`: any value set in `overrides` wins.
    pub fn merge(self, overrides: MirrorConfig) -> Self {
        Self {
            source: overrides.source.or(self.source),
            replica: overrides.replica.or(self.replica),
            log_file: overrides.log_file.or(self.log_file),
            interval_secs: overrides.interval_secs.or(self.interval_secs),
        }
    }
}

/// Fully resolved settings for a mirroring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub replica: PathBuf,
    pub log_file: PathBuf,
    pub interval_secs: u64,
}

impl Settings {
    /// Resolve command-line values against an optional config file.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSetting`] if a path is given in neither place, and
    /// [`Error::InvalidInterval`] for a zero interval.
    pub fn resolve(cli: MirrorConfig, file: Option<MirrorConfig>) -> Result<Self> {
        let merged = file.unwrap_or_default().merge(cli);

        let interval_secs = merged.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS);
        if interval_secs == 0 {
            return Err(Error::InvalidInterval {
                value: interval_secs,
            });
        }

        Ok(Self {
            source: required(merged.source, "source")?,
            replica: required(merged.replica, "replica")?,
            log_file: required(merged.log_file, "log_file")?,
            interval_secs,
        })
    }

    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval_secs)
    }
}

fn required(value: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    value.ok_or_else(|| Error::MissingSetting { name: name.into() })
}
