//! Error handling for tollgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod audit_error;
pub mod classification_error;
pub mod config_error;
pub mod error_code;
pub mod mismatch_error;
pub mod parse_error;
pub mod scan_error;
pub mod structural_error;

pub use audit_error::AuditError;
pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use error_code::TollgateErrorCode;
pub use mismatch_error::SpecificationMismatch;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
pub use structural_error::StructuralError;
