//! Syntax adapter: the arena tree the classifier walks, and the lowering
//! that produces it from Solidity sources.

pub mod lower;
pub mod tree;

pub use lower::lower;
pub use tree::{
    Ancestors, ContractDecl, NodeId, NodeKind, StateVariable, SyntaxNode, SyntaxTree,
    SyntaxTreeBuilder,
};
