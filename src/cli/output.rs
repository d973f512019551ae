//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, FsError, HashError};

/// Map domain/service errors to a string for CLI output, with a hint where
/// one helps.
pub fn map_error(e: &ApiError) -> String {
    let hint = match e {
        ApiError::Fs(FsError::NotFound { .. }) => {
            Some("Check that the path is correct and exists")
        }
        ApiError::Fs(FsError::PermissionDenied { .. })
        | ApiError::Hash(HashError::OpenFailed { .. }) => {
            Some("Check file permissions or run with appropriate privileges")
        }
        ApiError::Hash(HashError::UnsupportedAlgorithm(_)) | ApiError::Hash(HashError::NoAlgorithms) => {
            Some("Supported algorithms: md5, sha1, sha256")
        }
        _ => None,
    };

    match hint {
        Some(hint) => format!("Error: {}\nHint: {}", e, hint),
        None => format!("Error: {}", e),
    }
}
