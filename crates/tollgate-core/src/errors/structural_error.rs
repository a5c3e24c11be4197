//! Structural errors: the syntax tree does not have the expected shape.

use crate::types::SourceLocation;

use super::error_code::{self, TollgateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("Reference to {limit} in {contract} at {location} is not enclosed in any function")]
    NoEnclosingFunction {
        limit: String,
        contract: String,
        location: SourceLocation,
    },
}

impl TollgateErrorCode for StructuralError {
    fn error_code(&self) -> &'static str {
        error_code::STRUCTURAL_ERROR
    }
}
