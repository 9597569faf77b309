//! Error types for mirror-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mirror-core, including fatal pass failures
    #[error(transparent)]
    Core(#[from] mirror_core::Error),

    /// Error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// The log sink could not be set up
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}

impl CliError {
    pub fn logging(message: impl std::fmt::Display) -> Self {
        Self::Logging {
            message: message.to_string(),
        }
    }
}
