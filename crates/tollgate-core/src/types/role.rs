//! Contract roles recognized by the auditor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Deployment role of an audited controller. Each role has its own
/// expected identifier-to-function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractRole {
    /// Controller operating from a satellite chain.
    Satellite,
    /// Controller operating on the primary chain.
    Mainnet,
}

impl ContractRole {
    pub const ALL: [ContractRole; 2] = [ContractRole::Satellite, ContractRole::Mainnet];

    /// Resolve a role from a contract name. Unrecognized contracts are not audited.
    pub fn from_contract_name(name: &str) -> Option<Self> {
        match name {
            "ForeignController" => Some(Self::Satellite),
            "MainnetController" => Some(Self::Mainnet),
            _ => None,
        }
    }

    /// Name of the contract that plays this role.
    pub fn contract_name(self) -> &'static str {
        match self {
            Self::Satellite => "ForeignController",
            Self::Mainnet => "MainnetController",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Satellite => "satellite",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
