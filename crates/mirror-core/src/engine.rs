//! Mirror engine: one validate -> sync -> prune pass

use std::path::{Path, PathBuf};

use crate::Result;
use crate::logger::MirrorLogger;
use crate::sync::{forward_sync, reverse_prune};
use crate::validate::validate;

/// Run a single mirroring pass of `source` onto `replica`.
///
/// Phases run strictly in order: validation, forward sync, reverse prune.
/// A validation failure returns [`crate::Error::Validation`] before either
/// tree is touched (beyond creating a missing replica root). Per-entry
/// problems during sync or prune are logged as warnings and never abort the
/// pass; failing to enumerate a root does.
pub fn run_pass(source: &Path, replica: &Path, logger: &dyn MirrorLogger) -> Result<()> {
    tracing::debug!(phase = "validate", "Starting pass");
    validate(source, replica, logger)?;

    tracing::debug!(phase = "sync");
    forward_sync(source, replica, logger)?;

    tracing::debug!(phase = "prune");
    reverse_prune(source, replica, logger)?;

    tracing::debug!("Pass complete");
    Ok(())
}

/// A source/replica pair that can be mirrored repeatedly.
///
/// Holds nothing but the two roots: every pass re-reads both trees from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorEngine {
    source: PathBuf,
    replica: PathBuf,
}

impl MirrorEngine {
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn replica(&self) -> &Path {
        &self.replica
    }

    /// Run one pass. See [`run_pass`].
    pub fn run_pass(&self, logger: &dyn MirrorLogger) -> Result<()> {
        run_pass(&self.source, &self.replica, logger)
    }
}
