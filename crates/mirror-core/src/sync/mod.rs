//! The two mutating phases of a pass
//!
//! - [`forward_sync`]: source-driven create/update
//! - [`reverse_prune`]: replica-driven deletion of orphans, children first

pub mod forward;
pub mod prune;

pub use forward::forward_sync;
pub use prune::reverse_prune;
