//! Error types for the Unifiler file-system bookkeeping tool.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Enumeration errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to resolve absolute path for {}: {source}", path.display())]
    PathResolutionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Attach the offending path to an I/O error, keeping the not-found and
    /// permission kinds distinguishable for callers.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path },
            _ => FsError::Io { path, source: err },
        }
    }

    /// Path the failed file-system call was operating on.
    pub fn path(&self) -> &PathBuf {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::PathResolutionFailed { path, .. }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Digest computation errors
#[derive(Debug, Error)]
pub enum HashError {
    #[error("No hash algorithm requested")]
    NoAlgorithms,

    #[error("Unsupported hash algorithm: '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("Failed to open {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    StreamReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Read and write data mismatch for {algorithm} on {}: read {read} bytes, wrote {written}",
        path.display()
    )]
    AccumulatorWriteMismatch {
        path: PathBuf,
        algorithm: String,
        read: usize,
        written: usize,
        #[source]
        source: Option<io::Error>,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Orchestration-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
