//! Immutable arena syntax tree with explicit parent links.
//!
//! Node ids are assigned in preorder, so the subtree of any node is the
//! contiguous id range `[id, subtree_end)`. Parent ids are lookup-only back
//! references; the arena owns every node.

use serde::{Deserialize, Serialize};
use tollgate_core::types::{FxHashMap, SourceLocation};

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The node shapes the classifier distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    SourceUnit,
    Contract { name: String },
    /// Function boundary: functions, constructors, fallback and receive.
    FunctionDefinition { name: String },
    /// Modifier bodies are not function boundaries.
    ModifierDefinition { name: String },
    ModifierInvocation { name: String },
    /// `callee` is `None` when the call target is not a plain name
    /// (type conversions, `new` expressions).
    FunctionCall { callee: Option<String> },
    Identifier { name: String },
    Other,
}

impl NodeKind {
    pub fn is_function_definition(&self) -> bool {
        matches!(self, NodeKind::FunctionDefinition { .. })
    }

    pub fn is_modifier_invocation(&self) -> bool {
        matches!(self, NodeKind::ModifierInvocation { .. })
    }

    pub fn is_function_call(&self) -> bool {
        matches!(self, NodeKind::FunctionCall { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    /// One past the last id in this node's subtree.
    pub subtree_end: NodeId,
    /// Zero-based start line.
    pub line: u32,
    /// Zero-based start column.
    pub column: u32,
}

/// A state variable declared directly in a contract body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVariable {
    pub name: String,
    /// The declaration's own name identifier, if lowered; never a reference.
    pub declaration: NodeId,
    /// Resolved reference occurrences, in source order.
    pub references: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDecl {
    pub name: String,
    pub node: NodeId,
    pub state_variables: Vec<StateVariable>,
}

/// Syntax tree for a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    file: String,
    nodes: Vec<SyntaxNode>,
    contracts: Vec<ContractDecl>,
}

impl SyntaxTree {
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn contracts(&self) -> &[ContractDecl] {
        &self.contracts
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Ids in the subtree rooted at `id`, including `id`.
    pub fn subtree(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        (id.0..self.node(id).subtree_end.0).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn location(&self, id: NodeId) -> SourceLocation {
        let node = self.node(id);
        SourceLocation::new(self.file.clone(), node.line, node.column)
    }
}

/// Upward iterator returned by [`SyntaxTree::ancestors`].
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = (NodeId, &'t NodeKind);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.parent(id);
        Some((id, self.tree.kind(id)))
    }
}

/// Builds a [`SyntaxTree`] in preorder.
///
/// `open` pushes a node as a child of the currently open node, `close` ends
/// it. Leaves can use `leaf`. Contracts and state variables are registered
/// as they are opened; references are attached with `add_reference` or
/// resolved in bulk by [`SyntaxTreeBuilder::resolve_references`].
pub struct SyntaxTreeBuilder {
    file: String,
    nodes: Vec<SyntaxNode>,
    stack: Vec<NodeId>,
    contracts: Vec<ContractDecl>,
    contract_stack: Vec<usize>,
}

impl SyntaxTreeBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            nodes: Vec::new(),
            stack: Vec::new(),
            contracts: Vec::new(),
            contract_stack: Vec::new(),
        }
    }

    /// Open a node under the current one and make it current.
    pub fn open(&mut self, kind: NodeKind, line: u32, column: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        if let NodeKind::Contract { ref name } = kind {
            self.contracts.push(ContractDecl {
                name: name.clone(),
                node: id,
                state_variables: Vec::new(),
            });
            self.contract_stack.push(self.contracts.len() - 1);
        }
        self.nodes.push(SyntaxNode {
            kind,
            parent: self.stack.last().copied(),
            subtree_end: NodeId(id.0 + 1),
            line,
            column,
        });
        self.stack.push(id);
        id
    }

    /// Close the current node. Closing a contract ends its scope.
    pub fn close(&mut self) {
        if let Some(id) = self.stack.pop() {
            let end = NodeId(self.nodes.len() as u32);
            self.nodes[id.index()].subtree_end = end;
            if matches!(self.nodes[id.index()].kind, NodeKind::Contract { .. }) {
                self.contract_stack.pop();
            }
        }
    }

    /// Open and immediately close a node.
    pub fn leaf(&mut self, kind: NodeKind, line: u32, column: u32) -> NodeId {
        let id = self.open(kind, line, column);
        self.close();
        id
    }

    /// Register a state variable of the innermost open contract. `declaration`
    /// is the variable's name node. Ignored outside a contract.
    pub fn declare_state_variable(&mut self, name: impl Into<String>, declaration: NodeId) {
        if let Some(&idx) = self.contract_stack.last() {
            self.contracts[idx].state_variables.push(StateVariable {
                name: name.into(),
                declaration,
                references: Vec::new(),
            });
        }
    }

    /// Attach an explicit reference to a state variable of the innermost
    /// open contract. Returns false if no such variable is declared.
    pub fn add_reference(&mut self, variable: &str, reference: NodeId) -> bool {
        let Some(&idx) = self.contract_stack.last() else {
            return false;
        };
        match self.contracts[idx]
            .state_variables
            .iter_mut()
            .find(|v| v.name == variable)
        {
            Some(var) => {
                var.references.push(reference);
                true
            }
            None => false,
        }
    }

    /// Resolve references by name: every identifier inside a contract whose
    /// text equals one of that contract's state variables, other than the
    /// declaration itself, becomes a reference. Explicit references already
    /// attached are kept and not duplicated. A contract that is still open
    /// covers every node built so far.
    pub fn resolve_references(&mut self) {
        for contract in &mut self.contracts {
            let by_name: FxHashMap<&str, usize> = contract
                .state_variables
                .iter()
                .enumerate()
                .map(|(i, v)| (v.name.as_str(), i))
                .collect();

            let start = contract.node.0;
            let end = if self.stack.contains(&contract.node) {
                self.nodes.len() as u32
            } else {
                self.nodes[contract.node.index()].subtree_end.0
            };
            let mut hits = Vec::new();
            for raw in start..end {
                let id = NodeId(raw);
                if let NodeKind::Identifier { ref name } = self.nodes[id.index()].kind {
                    if let Some(&idx) = by_name.get(name.as_str()) {
                        hits.push((idx, id));
                    }
                }
            }

            for (idx, id) in hits {
                let var = &mut contract.state_variables[idx];
                if var.declaration != id && !var.references.contains(&id) {
                    var.references.push(id);
                }
            }
            for var in &mut contract.state_variables {
                var.references.sort();
            }
        }
    }

    /// Finish the tree, closing any nodes left open.
    pub fn finish(mut self) -> SyntaxTree {
        while !self.stack.is_empty() {
            self.close();
        }
        SyntaxTree {
            file: self.file,
            nodes: self.nodes,
            contracts: self.contracts,
        }
    }
}
