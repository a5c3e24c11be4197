//! Verifier: exact comparison of an observation against its specification.
//!
//! Pure and order-independent. `diff` collects every mismatch for reports;
//! `verify` fails on the first one.

use std::collections::BTreeSet;

use tollgate_core::errors::SpecificationMismatch;
use tollgate_core::types::{ContractObservation, ContractRole, ContractSpecification, UsageKind};

use crate::classifier::RoleObservations;
use crate::registry;

/// Every mismatch between `observed` and `expected` for `role`.
///
/// Order: the identifier-set mismatch (if any), then per identifier present
/// in both mappings in sorted order, kinds in `Exists, Decrease, Increase`
/// order.
pub fn diff(
    role: ContractRole,
    observed: &ContractObservation,
    expected: &ContractSpecification,
) -> Vec<SpecificationMismatch> {
    let mut mismatches = Vec::new();

    let observed_ids: BTreeSet<&str> = observed.limits().collect();
    let expected_ids: BTreeSet<&str> = expected.limits().collect();
    let (missing, extra) = symmetric_difference(&expected_ids, &observed_ids);
    if !missing.is_empty() || !extra.is_empty() {
        mismatches.push(SpecificationMismatch::IdentifierSet {
            role,
            missing,
            extra,
        });
    }

    for limit in observed_ids.intersection(&expected_ids) {
        let (Some(obs), Some(exp)) = (observed.get(limit), expected.get(limit)) else {
            continue;
        };
        for kind in UsageKind::ALL {
            let observed_fns: BTreeSet<&str> = obs.get(kind).iter().map(String::as_str).collect();
            let expected_fns: BTreeSet<&str> = exp.get(kind).iter().map(String::as_str).collect();
            let (missing, extra) = symmetric_difference(&expected_fns, &observed_fns);
            if !missing.is_empty() || !extra.is_empty() {
                mismatches.push(SpecificationMismatch::FunctionSet {
                    role,
                    limit: limit.to_string(),
                    kind,
                    missing,
                    extra,
                });
            }
        }
    }

    mismatches
}

/// Fail on the first mismatch `diff` would report.
pub fn verify(
    role: ContractRole,
    observed: &ContractObservation,
    expected: &ContractSpecification,
) -> Result<(), SpecificationMismatch> {
    match diff(role, observed, expected).into_iter().next() {
        Some(mismatch) => Err(mismatch),
        None => Ok(()),
    }
}

/// Verify every role against the compiled-in registry. Passes only if no
/// role has a mismatch.
pub fn verify_all(observations: &RoleObservations) -> Result<(), SpecificationMismatch> {
    for role in ContractRole::ALL {
        verify(role, observations.get(role), &registry::specification(role))?;
    }
    Ok(())
}

/// `(expected - observed, observed - expected)`, each sorted.
fn symmetric_difference(
    expected: &BTreeSet<&str>,
    observed: &BTreeSet<&str>,
) -> (Vec<String>, Vec<String>) {
    let missing = expected.difference(observed).map(|s| s.to_string()).collect();
    let extra = observed.difference(expected).map(|s| s.to_string()).collect();
    (missing, extra)
}
