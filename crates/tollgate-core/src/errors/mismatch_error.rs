//! Specification mismatches found by the verifier.

use serde::Serialize;

use crate::types::{ContractRole, UsageKind};

use super::error_code::{self, TollgateErrorCode};

/// A disagreement between an observation and its specification table.
/// `missing` lists names the specification expects but the source lacks;
/// `extra` lists names the source has but the specification does not.
/// Both are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecificationMismatch {
    #[error("Mismatch in {role} rate-limit identifiers: missing {missing:?}, extra {extra:?}")]
    IdentifierSet {
        role: ContractRole,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("Mismatch in {role} {limit}.{kind}: missing {missing:?}, extra {extra:?}")]
    FunctionSet {
        role: ContractRole,
        limit: String,
        kind: UsageKind,
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

impl SpecificationMismatch {
    pub fn role(&self) -> ContractRole {
        match self {
            Self::IdentifierSet { role, .. } | Self::FunctionSet { role, .. } => *role,
        }
    }

    pub fn missing(&self) -> &[String] {
        match self {
            Self::IdentifierSet { missing, .. } | Self::FunctionSet { missing, .. } => missing,
        }
    }

    pub fn extra(&self) -> &[String] {
        match self {
            Self::IdentifierSet { extra, .. } | Self::FunctionSet { extra, .. } => extra,
        }
    }
}

impl TollgateErrorCode for SpecificationMismatch {
    fn error_code(&self) -> &'static str {
        error_code::SPEC_MISMATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_set_message_names_limit_and_kind() {
        let err = SpecificationMismatch::FunctionSet {
            role: ContractRole::Satellite,
            limit: "LIMIT_4626_DEPOSIT".into(),
            kind: UsageKind::Exists,
            missing: vec!["reallocateMorpho".into()],
            extra: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("LIMIT_4626_DEPOSIT.exists"), "{msg}");
        assert!(msg.contains("reallocateMorpho"), "{msg}");
        assert!(err.diagnostic().starts_with("[SPEC_MISMATCH]"));
    }
}
