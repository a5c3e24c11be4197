//! Upward walk from a reference to its enclosing function.

use tollgate_core::types::collections::SmallVec4;
use tollgate_core::types::UsageKind;

use super::vocabulary::{match_call_chain, GuardModifier};
use crate::syntax::{NodeId, NodeKind, SyntaxTree};

/// What the walk from one reference collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageContext<'t> {
    /// Enclosing function name.
    pub function: &'t str,
    /// Nearest enclosing modifier invocation.
    pub modifier: Option<&'t str>,
    /// Named calls between the reference and the function, innermost first.
    pub calls: SmallVec4<&'t str>,
}

/// Why a context could not be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unclassified {
    Bare,
    UnknownModifier(String),
    UnknownCallChain(Vec<String>),
}

/// Walk the ancestors of `reference` up to the first function definition.
/// Returns `None` if the walk runs out of ancestors first.
pub fn enclosing_usage(tree: &SyntaxTree, reference: NodeId) -> Option<UsageContext<'_>> {
    let mut modifier = None;
    let mut calls = SmallVec4::new();

    for (_, kind) in tree.ancestors(reference) {
        match kind {
            NodeKind::ModifierInvocation { name } => {
                if modifier.is_none() {
                    modifier = Some(name.as_str());
                }
            }
            NodeKind::FunctionCall { callee: Some(callee) } => calls.push(callee.as_str()),
            NodeKind::FunctionDefinition { name } => {
                return Some(UsageContext {
                    function: name.as_str(),
                    modifier,
                    calls,
                });
            }
            _ => {}
        }
    }
    None
}

/// Tag a context with its usage. A modifier, when present, decides alone.
pub fn classify_usage(ctx: &UsageContext<'_>) -> Result<UsageKind, Unclassified> {
    if let Some(name) = ctx.modifier {
        return match GuardModifier::from_name(name) {
            Some(modifier) => Ok(modifier.usage()),
            None => Err(Unclassified::UnknownModifier(name.to_string())),
        };
    }
    if ctx.calls.is_empty() {
        return Err(Unclassified::Bare);
    }
    match match_call_chain(&ctx.calls) {
        Some(helper) => Ok(helper.usage()),
        None => Err(Unclassified::UnknownCallChain(
            ctx.calls.iter().map(|c| c.to_string()).collect(),
        )),
    }
}
