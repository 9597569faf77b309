//! Error types for mirror-core

use mirror_fs::NormalizedPath;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structural problems with the source/replica roots.
///
/// Any of these aborts the pass before a single entry is touched. The caller
/// decides whether to stop or try again on the next pass. Paths are stored
/// the way log lines show them.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Source folder not found: \"{path}\"")]
    SourceNotFound { path: NormalizedPath },

    #[error("Source is not a directory: \"{path}\"")]
    SourceNotDirectory { path: NormalizedPath },

    #[error("Replica is not a directory: \"{path}\"")]
    ReplicaNotDirectory { path: NormalizedPath },

    #[error("Could not create replica folder \"{path}\": {source}")]
    ReplicaCreate {
        path: NormalizedPath,
        #[source]
        source: mirror_fs::Error,
    },

    #[error("Source and replica overlap: \"{source_root}\" and \"{replica_root}\"")]
    OverlappingRoots {
        source_root: NormalizedPath,
        replica_root: NormalizedPath,
    },
}

/// Errors that can occur in mirror-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pass was aborted during validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A tree could not be enumerated at all, or another fatal filesystem error
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// A required setting was supplied neither on the command line nor in the config file
    #[error("Missing required setting: {name}")]
    MissingSetting { name: String },

    /// Interval between passes must be positive
    #[error("Interval must be a positive integer, got {value}")]
    InvalidInterval { value: u64 },
}

impl Error {
    /// True if the pass failed validation (as opposed to during traversal).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<mirror_fs::WalkError> for Error {
    fn from(err: mirror_fs::WalkError) -> Self {
        Self::Fs(err.into())
    }
}
