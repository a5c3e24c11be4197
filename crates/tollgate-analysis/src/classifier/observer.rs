//! Builds one observation per contract role from a set of syntax trees.

use std::collections::BTreeMap;

use serde::Serialize;
use tollgate_core::constants::LIMIT_PREFIX;
use tollgate_core::errors::{AuditError, ClassificationError, StructuralError};
use tollgate_core::types::{ContractObservation, ContractRole, UsageRecord};

use super::walk::{classify_usage, enclosing_usage, Unclassified};
use crate::syntax::{NodeId, SyntaxTree};

/// Observations for every recognized role. Both roles are always present,
/// so a controller missing from the sources shows up as an empty mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleObservations {
    by_role: BTreeMap<ContractRole, ContractObservation>,
}

impl Default for RoleObservations {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleObservations {
    pub fn new() -> Self {
        Self {
            by_role: ContractRole::ALL
                .into_iter()
                .map(|role| (role, ContractObservation::new()))
                .collect(),
        }
    }

    pub fn get(&self, role: ContractRole) -> &ContractObservation {
        // Populated for every role in `new`.
        &self.by_role[&role]
    }

    pub fn record(&mut self, role: ContractRole, record: UsageRecord) -> bool {
        self.by_role.entry(role).or_default().record(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContractRole, &ContractObservation)> {
        self.by_role.iter().map(|(role, obs)| (*role, obs))
    }
}

/// Classify one reference to `limit`, declared in `contract`.
pub fn classify_reference(
    tree: &SyntaxTree,
    contract: &str,
    limit: &str,
    reference: NodeId,
) -> Result<UsageRecord, AuditError> {
    let location = tree.location(reference);
    let ctx = enclosing_usage(tree, reference).ok_or_else(|| StructuralError::NoEnclosingFunction {
        limit: limit.to_string(),
        contract: contract.to_string(),
        location: location.clone(),
    })?;

    let kind = classify_usage(&ctx).map_err(|reason| {
        let limit = limit.to_string();
        let function = ctx.function.to_string();
        match reason {
            Unclassified::Bare => ClassificationError::BareReference {
                limit,
                function,
                location,
            },
            Unclassified::UnknownModifier(modifier) => ClassificationError::UnknownModifier {
                limit,
                function,
                modifier,
                location,
            },
            Unclassified::UnknownCallChain(chain) => ClassificationError::UnknownCallChain {
                limit,
                function,
                chain,
                location,
            },
        }
    })?;

    Ok(UsageRecord {
        limit: limit.to_string(),
        kind,
        function: ctx.function.to_string(),
    })
}

/// Classify every rate-limit reference in every recognized contract.
///
/// One linear pass; the first reference that cannot be classified aborts the
/// run. The returned observations are only handed out once complete.
pub fn observe<'a, I>(trees: I) -> Result<RoleObservations, AuditError>
where
    I: IntoIterator<Item = &'a SyntaxTree>,
{
    let mut observations = RoleObservations::new();

    for tree in trees {
        for contract in tree.contracts() {
            let Some(role) = ContractRole::from_contract_name(&contract.name) else {
                continue;
            };

            let mut references = 0usize;
            for var in contract
                .state_variables
                .iter()
                .filter(|v| v.name.starts_with(LIMIT_PREFIX))
            {
                for &reference in &var.references {
                    let record = classify_reference(tree, &contract.name, &var.name, reference)?;
                    tracing::debug!(
                        limit = %record.limit,
                        kind = %record.kind,
                        function = %record.function,
                        location = %tree.location(reference),
                        "classified reference"
                    );
                    observations.record(role, record);
                    references += 1;
                }
            }

            tracing::info!(
                contract = %contract.name,
                role = %role,
                file = tree.file(),
                references,
                "classified rate-limit references"
            );
        }
    }

    Ok(observations)
}
