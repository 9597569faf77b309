//! Fixed-interval pass loop

use std::time::Duration;

use mirror_core::{MirrorEngine, MirrorLogger};

use crate::error::Result;

/// Run passes back to back with `interval` of sleep between them.
///
/// Stops after `limit` passes when given, otherwise runs until a pass fails.
/// No sleep follows the final pass. A fatal pass error is returned as-is so
/// the caller decides how to exit.
pub fn run(
    engine: &MirrorEngine,
    interval: Duration,
    limit: Option<u64>,
    logger: &dyn MirrorLogger,
    mut sleep: impl FnMut(Duration),
) -> Result<()> {
    let mut completed = 0u64;
    loop {
        engine.run_pass(logger)?;
        completed += 1;
        tracing::debug!(pass = completed, "Pass finished");

        if limit.is_some_and(|max| completed >= max) {
            return Ok(());
        }
        sleep(interval);
    }
}
