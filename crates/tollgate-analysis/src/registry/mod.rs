//! Specification registry: the hand-maintained expected tables, one per
//! contract role.
//!
//! These tables are audited ground truth and are never derived from source.
//! Keep them as plain data so that a wiring change shows up as a data diff.

pub mod mainnet;
pub mod satellite;

use tollgate_core::types::{ContractRole, ContractSpecification, UsageKind, UsageSets};

/// Expected wiring of one rate-limit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitSpec {
    pub limit: &'static str,
    pub exists: &'static [&'static str],
    pub decrease: &'static [&'static str],
    pub increase: &'static [&'static str],
}

impl LimitSpec {
    pub fn functions(&self, kind: UsageKind) -> &'static [&'static str] {
        match kind {
            UsageKind::Exists => self.exists,
            UsageKind::Decrease => self.decrease,
            UsageKind::Increase => self.increase,
        }
    }

    fn usage_sets(&self) -> UsageSets {
        let mut sets = UsageSets::default();
        for kind in UsageKind::ALL {
            for function in self.functions(kind) {
                sets.insert(kind, *function);
            }
        }
        sets
    }
}

/// Raw table for `role`.
pub fn table(role: ContractRole) -> &'static [LimitSpec] {
    match role {
        ContractRole::Satellite => satellite::SATELLITE_CONTROLLER,
        ContractRole::Mainnet => mainnet::MAINNET_CONTROLLER,
    }
}

/// Build the specification mapping for `role`.
pub fn specification(role: ContractRole) -> ContractSpecification {
    let mut spec = ContractSpecification::new();
    for entry in table(role) {
        spec.insert_entry(entry.limit, entry.usage_sets());
    }
    spec
}
