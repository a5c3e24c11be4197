//! Tree-sitter parser subsystem: Solidity grammar, thread_local parser
//! instances, lowering into the arena syntax tree.

pub mod error_tolerant;
pub mod solidity;
pub mod traits;
pub mod types;

pub use solidity::SolidityParser;
pub use traits::LanguageParser;
pub use types::ParsedSource;
