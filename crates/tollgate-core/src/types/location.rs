//! Source positions carried by diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A file position. `line` and `column` are zero-based, as tree-sitter
/// reports them; `Display` renders them one-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let loc = SourceLocation::new("src/MainnetController.sol", 0, 4);
        assert_eq!(loc.to_string(), "src/MainnetController.sol:1:5");
    }
}
