//! Solidity parser backed by tree-sitter-solidity.

use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

use tollgate_core::constants::SOLIDITY_EXTENSION;
use tollgate_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant::count_errors;
use super::traits::LanguageParser;
use super::types::ParsedSource;
use crate::scanner::hasher::hash_content;
use crate::syntax::lower;

thread_local! {
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

fn new_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_solidity::LANGUAGE.into())
        .map_err(|e| ParseError::GrammarLoad {
            message: e.to_string(),
        })?;
    Ok(parser)
}

pub struct SolidityParser;

impl Default for SolidityParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidityParser {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageParser for SolidityParser {
    fn extensions(&self) -> &[&str] {
        &[SOLIDITY_EXTENSION]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let started = Instant::now();
        let file = path.display().to_string();

        let tree = PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_none() {
                *slot = Some(new_parser()?);
            }
            slot.as_mut()
                .and_then(|parser| parser.parse(source, None))
                .ok_or_else(|| ParseError::TreeSitterError {
                    path: path.to_path_buf(),
                    message: "parser produced no tree".to_string(),
                })
        })?;

        let root = tree.root_node();
        let (error_count, error_ranges) = count_errors(root);
        let syntax = lower(root, source, &file);

        tracing::trace!(file = %file, nodes = syntax.len(), error_count, "parsed");

        Ok(ParsedSource {
            file,
            content_hash: hash_content(source),
            syntax,
            parse_time_us: started.elapsed().as_micros() as u64,
            error_count,
            error_ranges,
            has_errors: error_count > 0,
        })
    }
}
