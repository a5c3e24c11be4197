//! Parse output and source ranges.

use serde::{Deserialize, Serialize};

use crate::syntax::SyntaxTree;

/// Output of parsing one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSource {
    pub file: String,
    pub content_hash: u64,
    pub syntax: SyntaxTree,
    pub parse_time_us: u64,
    pub error_count: u32,
    pub error_ranges: Vec<Range>,
    pub has_errors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start: Position {
                line: start.row as u32,
                column: start.column as u32,
            },
            end: Position {
                line: end.row as u32,
                column: end.column as u32,
            },
        }
    }
}
