//! Aggregate error for a full audit run.

use super::error_code::TollgateErrorCode;
use super::{
    ClassificationError, ConfigError, ParseError, ScanError, SpecificationMismatch,
    StructuralError,
};

/// Any error that aborts an audit. Every variant is fatal: there is no
/// partial-success mode.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Specification mismatch: {0}")]
    Mismatch(#[from] SpecificationMismatch),
}

impl TollgateErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Structural(e) => e.error_code(),
            Self::Classification(e) => e.error_code(),
            Self::Mismatch(e) => e.error_code(),
        }
    }
}
