//! LanguageParser trait: the contract a source front end implements.

use std::path::Path;

use tollgate_core::errors::ParseError;

use super::types::ParsedSource;

/// Turns source bytes into a lowered [`ParsedSource`].
pub trait LanguageParser: Send + Sync {
    /// File extensions this parser handles.
    fn extensions(&self) -> &[&str];

    /// Parse `source`, read from `path`, into a syntax tree.
    fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError>;
}
