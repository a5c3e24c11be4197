//! Verifier tests: observations built by classifying trees generated from
//! the registry tables, then perturbed.

use tollgate_analysis::audit::AuditReport;
use tollgate_analysis::classifier::{observe, RoleObservations};
use tollgate_analysis::registry::{self, LimitSpec};
use tollgate_analysis::syntax::{NodeKind, SyntaxTree, SyntaxTreeBuilder};
use tollgate_analysis::verifier::{diff, verify, verify_all};
use tollgate_core::errors::{AuditError, SpecificationMismatch};
use tollgate_core::types::{ContractRole, UsageKind};

fn wrapper(kind: UsageKind) -> NodeKind {
    match kind {
        UsageKind::Exists => NodeKind::ModifierInvocation {
            name: "rateLimitExists".into(),
        },
        UsageKind::Decrease => NodeKind::FunctionCall {
            callee: Some("triggerRateLimitDecrease".into()),
        },
        UsageKind::Increase => NodeKind::FunctionCall {
            callee: Some("triggerRateLimitIncrease".into()),
        },
    }
}

/// A controller tree wired exactly as `table` says, minus any
/// `(limit, function)` in `skip`, plus `extra` references.
fn controller_tree(
    role: ContractRole,
    table: &[LimitSpec],
    skip: &[(&str, &str)],
    extra: &[(&str, UsageKind, &str)],
) -> SyntaxTree {
    let mut b = SyntaxTreeBuilder::new(format!("{}.sol", role.contract_name()));
    b.open(NodeKind::SourceUnit, 0, 0);
    b.open(
        NodeKind::Contract {
            name: role.contract_name().into(),
        },
        0,
        0,
    );

    let mut limits: Vec<&str> = table.iter().map(|e| e.limit).collect();
    limits.extend(extra.iter().map(|(l, _, _)| *l));
    for limit in &limits {
        let id = b.leaf(NodeKind::Identifier { name: limit.to_string() }, 1, 0);
        b.declare_state_variable(*limit, id);
    }

    let mut reference = |limit: &str, kind: UsageKind, function: &str| {
        b.open(NodeKind::FunctionDefinition { name: function.into() }, 2, 0);
        b.open(wrapper(kind), 2, 4);
        b.leaf(NodeKind::Identifier { name: limit.into() }, 2, 8);
        b.close();
        b.close();
    };

    for entry in table {
        for kind in UsageKind::ALL {
            for function in entry.functions(kind) {
                if !skip.contains(&(entry.limit, *function)) {
                    reference(entry.limit, kind, *function);
                }
            }
        }
    }
    for (limit, kind, function) in extra {
        reference(*limit, *kind, *function);
    }

    b.resolve_references();
    b.finish()
}

fn observe_role(role: ContractRole, skip: &[(&str, &str)], extra: &[(&str, UsageKind, &str)]) -> RoleObservations {
    let tree = controller_tree(role, registry::table(role), skip, extra);
    observe(std::iter::once(&tree)).unwrap()
}

#[test]
fn test_scenario_a_satellite_4626_deposit_matches() {
    let obs = observe_role(ContractRole::Satellite, &[], &[]);
    let sets = obs.get(ContractRole::Satellite).get("LIMIT_4626_DEPOSIT").unwrap();

    let names = |kind| sets.get(kind).iter().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(
        names(UsageKind::Exists),
        vec!["reallocateMorpho", "setSupplyQueueMorpho", "updateWithdrawQueueMorpho"]
    );
    assert_eq!(names(UsageKind::Decrease), vec!["depositERC4626"]);
    assert_eq!(names(UsageKind::Increase), vec!["redeemERC4626", "withdrawERC4626"]);

    let spec = registry::specification(ContractRole::Satellite);
    assert!(verify(ContractRole::Satellite, obs.get(ContractRole::Satellite), &spec).is_ok());
}

#[test]
fn test_scenario_b_missing_exists_function() {
    let obs = observe_role(
        ContractRole::Satellite,
        &[("LIMIT_4626_DEPOSIT", "reallocateMorpho")],
        &[],
    );
    let spec = registry::specification(ContractRole::Satellite);
    let err = verify(ContractRole::Satellite, obs.get(ContractRole::Satellite), &spec).unwrap_err();

    assert_eq!(
        err,
        SpecificationMismatch::FunctionSet {
            role: ContractRole::Satellite,
            limit: "LIMIT_4626_DEPOSIT".into(),
            kind: UsageKind::Exists,
            missing: vec!["reallocateMorpho".into()],
            extra: vec![],
        }
    );
    assert!(err.to_string().contains("LIMIT_4626_DEPOSIT.exists"));
}

#[test]
fn test_scenario_c_new_identifier_is_extra() {
    let obs = observe_role(
        ContractRole::Mainnet,
        &[],
        &[("LIMIT_NEW_FEATURE", UsageKind::Decrease, "doNewThing")],
    );
    let spec = registry::specification(ContractRole::Mainnet);
    let err = verify(ContractRole::Mainnet, obs.get(ContractRole::Mainnet), &spec).unwrap_err();

    assert_eq!(
        err,
        SpecificationMismatch::IdentifierSet {
            role: ContractRole::Mainnet,
            missing: vec![],
            extra: vec!["LIMIT_NEW_FEATURE".into()],
        }
    );
}

#[test]
fn test_extra_function_on_known_identifier() {
    let obs = observe_role(
        ContractRole::Mainnet,
        &[],
        &[("LIMIT_USDS_MINT", UsageKind::Increase, "emergencyBurn")],
    );
    let spec = registry::specification(ContractRole::Mainnet);
    let mismatches = diff(ContractRole::Mainnet, obs.get(ContractRole::Mainnet), &spec);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].extra(), ["emergencyBurn".to_string()]);
}

#[test]
fn test_verify_all_requires_both_roles() {
    let tree = controller_tree(
        ContractRole::Mainnet,
        registry::table(ContractRole::Mainnet),
        &[],
        &[],
    );
    let obs = observe(std::iter::once(&tree)).unwrap();

    // Satellite controller absent: every satellite identifier is missing.
    let err = verify_all(&obs).unwrap_err();
    assert_eq!(err.role(), ContractRole::Satellite);
    assert_eq!(err.missing().len(), registry::table(ContractRole::Satellite).len());
}

#[test]
fn test_fully_wired_controllers_pass() {
    let trees = [
        controller_tree(ContractRole::Satellite, registry::table(ContractRole::Satellite), &[], &[]),
        controller_tree(ContractRole::Mainnet, registry::table(ContractRole::Mainnet), &[], &[]),
    ];
    let obs = observe(trees.iter()).unwrap();
    assert!(verify_all(&obs).is_ok());

    let report = AuditReport::from_observations(&obs, trees.len());
    assert!(report.passed);
    assert_eq!(report.mismatch_count(), 0);
    assert!(report.into_result().is_ok());
}

#[test]
fn test_failing_report_converts_to_first_mismatch() {
    let obs = observe_role(
        ContractRole::Satellite,
        &[("LIMIT_4626_DEPOSIT", "reallocateMorpho")],
        &[],
    );
    let report = AuditReport::from_observations(&obs, 1);
    assert!(!report.passed);

    // Mainnet reports come second in role order, so the satellite mismatch is first.
    match report.into_result() {
        Err(AuditError::Mismatch(m)) => assert_eq!(m.role(), ContractRole::Satellite),
        other => panic!("expected mismatch, got {other:?}"),
    }
}
