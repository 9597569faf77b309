//! Mirror engine for folder-mirror
//!
//! One call to [`run_pass`] makes a replica directory tree match a source
//! tree:
//!
//! - **Validate**: the source must be an existing directory; a missing replica
//!   root is created
//! - **Forward sync**: walk the source top-down, create missing directories and
//!   copy files whose content digest differs
//! - **Reverse prune**: walk the replica, then visit it bottom-up and delete
//!   entries with no source counterpart
//!
//! # Architecture
//!
//! ```text
//!                  mirror-cli
//!                      |
//!                 mirror-core
//!      (validate -> sync::forward -> sync::prune)
//!                      |
//!                  mirror-fs
//!     (walk, rebase, checksum, copy/remove)
//! ```
//!
//! User-facing progress lines go through an injected [`MirrorLogger`]; the
//! engine holds no global state and nothing survives between passes.
//!
//! # Example
//!
//! ```no_run
//! use mirror_core::{TracingLogger, run_pass};
//!
//! fn example() -> mirror_core::Result<()> {
//!     run_pass("/data/source".as_ref(), "/backup/replica".as_ref(), &TracingLogger)
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod sync;
pub mod validate;

pub use config::{DEFAULT_INTERVAL_SECS, MirrorConfig, Settings};
pub use engine::{MirrorEngine, run_pass};
pub use error::{Error, Result, ValidationError};
pub use logger::{MirrorLogger, TracingLogger};
pub use sync::{forward_sync, reverse_prune};
pub use validate::validate;
