//! Filesystem layer for folder-mirror
//!
//! Provides the building blocks the mirror engine composes into a pass:
//! streamed content digests, top-down tree enumeration, root-to-root path
//! mapping and copy/remove primitives that report the failing path.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, entry_exists, rebase};
pub use walk::{Entry, EntryKind, Walk, WalkError, walk};
