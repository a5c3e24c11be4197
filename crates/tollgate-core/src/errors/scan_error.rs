//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, TollgateErrorCode};

/// Errors that can occur while discovering and reading source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {message}")]
    Walk { message: String },
}

impl TollgateErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
