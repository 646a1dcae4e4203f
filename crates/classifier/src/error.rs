use std::path::PathBuf;
use thiserror::Error;

/// Result type for framedoc operations
pub type Result<T> = std::result::Result<T, FrameDocError>;

/// Errors that abort a generator run
#[derive(Error, Debug)]
pub enum FrameDocError {
    /// The frame dump could not be read
    #[error("Failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML artifact could not be written
    #[error("Failed to write artifact {path}: {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FrameDocError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Path of the file involved, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ReadInput { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteArtifact { path, .. } => Some(path.as_path()),
            Self::InvalidConfig(_) => None,
        }
    }
}
