//! Lowering from a tree-sitter-solidity concrete tree into [`SyntaxTree`].
//!
//! Every named node becomes an arena node; the handful of shapes the
//! classifier cares about get a dedicated [`NodeKind`], the rest are
//! `Other`. Name resolution happens here as well: state variables are the
//! `state_variable_declaration`s of a contract body, and their references
//! are the same-named identifiers inside that contract, except member
//! accesses on other contracts.

use tree_sitter::Node;

use super::tree::{NodeKind, SyntaxTree, SyntaxTreeBuilder};

/// Lower the tree rooted at `root`. `source` must be the bytes it was parsed from.
pub fn lower(root: Node, source: &[u8], file: &str) -> SyntaxTree {
    let mut builder = SyntaxTreeBuilder::new(file);
    let mut cursor = root.walk();
    // Whether each ancestor on the cursor path opened a builder node.
    let mut opened_stack: Vec<bool> = Vec::new();

    'walk: loop {
        let node = cursor.node();
        let opened = enter(&mut builder, node, source);

        if cursor.goto_first_child() {
            opened_stack.push(opened);
            continue;
        }
        if opened {
            builder.close();
        }

        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
            if opened_stack.pop().unwrap_or(false) {
                builder.close();
            }
        }
    }

    builder.resolve_references();
    builder.finish()
}

/// Open a builder node for `node` if it is named. Returns whether one was opened.
fn enter(builder: &mut SyntaxTreeBuilder, node: Node, source: &[u8]) -> bool {
    if !node.is_named() {
        return false;
    }
    let start = node.start_position();
    let (line, column) = (start.row as u32, start.column as u32);
    let kind = node_kind(node, source);

    let is_state_variable_name = matches!(kind, NodeKind::Identifier { .. })
        && node
            .parent()
            .filter(|p| p.kind() == "state_variable_declaration")
            .and_then(|p| p.child_by_field_name("name"))
            .is_some_and(|name| name.id() == node.id());

    let id = builder.open(kind, line, column);
    if is_state_variable_name {
        builder.declare_state_variable(text(node, source), id);
    }
    true
}

fn node_kind(node: Node, source: &[u8]) -> NodeKind {
    match node.kind() {
        "source_file" => NodeKind::SourceUnit,
        "contract_declaration" | "library_declaration" | "interface_declaration" => {
            NodeKind::Contract {
                name: field_text(node, "name", source),
            }
        }
        "function_definition" => NodeKind::FunctionDefinition {
            name: field_text(node, "name", source),
        },
        "constructor_definition" => NodeKind::FunctionDefinition {
            name: "constructor".to_string(),
        },
        "fallback_receive_definition" => {
            let name = if text(node, source).trim_start().starts_with("receive") {
                "receive"
            } else {
                "fallback"
            };
            NodeKind::FunctionDefinition {
                name: name.to_string(),
            }
        }
        "modifier_definition" => NodeKind::ModifierDefinition {
            name: field_text(node, "name", source),
        },
        "modifier_invocation" => NodeKind::ModifierInvocation {
            name: modifier_name(node, source),
        },
        "call_expression" => {
            let target = node
                .child_by_field_name("function")
                .or_else(|| node.named_child(0));
            NodeKind::FunctionCall {
                callee: target.and_then(|t| callee_name(t, source)),
            }
        }
        "identifier" if is_foreign_member(node, source) => NodeKind::Other,
        "identifier" => NodeKind::Identifier {
            name: text(node, source),
        },
        _ => NodeKind::Other,
    }
}

/// Whether `node` is the property of a member access on something other than
/// `this` or the enclosing contract. Such a name belongs to another contract
/// and never resolves to a local state variable.
fn is_foreign_member(node: Node, source: &[u8]) -> bool {
    let Some(parent) = node.parent().filter(|p| p.kind() == "member_expression") else {
        return false;
    };
    if parent
        .child_by_field_name("property")
        .map_or(true, |p| p.id() != node.id())
    {
        return false;
    }
    let object = parent
        .child_by_field_name("object")
        .map(|o| text(o, source))
        .unwrap_or_default();
    let object = object.trim();
    object != "this" && Some(object) != enclosing_contract_name(node, source).as_deref()
}

fn enclosing_contract_name(node: Node, source: &[u8]) -> Option<String> {
    let mut current = node.parent();
    while let Some(n) = current {
        if matches!(
            n.kind(),
            "contract_declaration" | "library_declaration" | "interface_declaration"
        ) {
            return Some(field_text(n, "name", source));
        }
        current = n.parent();
    }
    None
}

/// Last segment of the modifier's identifier path: `Base.rateLimited(..)` → `rateLimited`.
fn modifier_name(node: Node, source: &[u8]) -> String {
    let mut last = None;
    let child_count = node.child_count();
    for i in 0..child_count {
        let Some(child) = node.child(i) else {
            continue;
        };
        match child.kind() {
            "identifier" => last = Some(child),
            // Arguments follow the path.
            "(" | "call_argument" => break,
            _ => {}
        }
    }
    match last {
        Some(ident) => text(ident, source),
        None => {
            let raw = text(node, source);
            let head = raw.split('(').next().unwrap_or_default();
            head.rsplit('.').next().unwrap_or_default().trim().to_string()
        }
    }
}

/// Name of the function a call targets, unwrapping expression wrappers,
/// parentheses, call options and member access. `None` for calls whose
/// target is not a name.
fn callee_name(node: Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "identifier" => Some(text(node, source)),
        "member_expression" => node
            .child_by_field_name("property")
            .and_then(|p| callee_name(p, source)),
        "struct_expression" => node
            .child_by_field_name("type")
            .or_else(|| node.named_child(0))
            .and_then(|t| callee_name(t, source)),
        "expression" | "parenthesized_expression" => {
            node.named_child(0).and_then(|c| callee_name(c, source))
        }
        _ => None,
    }
}

fn field_text(node: Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|n| text(n, source))
        .unwrap_or_default()
}

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}
