//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, TollgateErrorCode};

/// Errors that can occur while parsing Solidity sources.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar could not be loaded: {message}")]
    GrammarLoad { message: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },

    #[error("Partial parse of {path}: {error_count} syntax error(s), first at line {first_line}")]
    PartialParse {
        path: PathBuf,
        error_count: u32,
        first_line: u32,
    },
}

impl TollgateErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
