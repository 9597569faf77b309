//! Logger capability injected into every pass

/// Sink for the one-line-per-side-effect narration of a pass.
///
/// `info` receives `Created`, `Updated` and `Removed` lines; `warning`
/// receives `Skipped ...` lines for entries that could not be processed.
pub trait MirrorLogger {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

impl<T: MirrorLogger + ?Sized> MirrorLogger for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }
}

/// Forwards pass narration to `tracing` under the `mirror` target.
///
/// Where the lines end up (log file, console) is decided by whichever
/// subscriber the binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl MirrorLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "mirror", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "mirror", "{}", message);
    }
}
