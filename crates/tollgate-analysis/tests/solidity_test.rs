//! Solidity front end and end-to-end audit tests.

use std::path::{Path, PathBuf};

use tollgate_analysis::audit;
use tollgate_analysis::classifier::observe;
use tollgate_analysis::parsers::{LanguageParser, SolidityParser};
use tollgate_analysis::reporters::{available_formats, create_reporter};
use tollgate_analysis::syntax::{NodeKind, SyntaxTree};
use tollgate_core::config::{CliOverrides, TollgateConfig};
use tollgate_core::errors::{AuditError, ClassificationError, ParseError, SpecificationMismatch};
use tollgate_core::types::{ContractRole, UsageKind};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/solidity")
}

fn parse(source: &str) -> SyntaxTree {
    let parsed = SolidityParser::new()
        .parse(source.as_bytes(), Path::new("Test.sol"))
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    assert!(!parsed.has_errors, "unexpected syntax errors: {:?}", parsed.error_ranges);
    parsed.syntax
}

/// Project root with `src/` populated from `files`.
fn project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    for (name, content) in files {
        std::fs::write(src.join(name), content).unwrap();
    }
    dir
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// ---- Lowering ----

#[test]
fn test_lowering_resolves_state_variable_references() {
    let tree = parse(
        r#"
contract MainnetController {
    bytes32 public constant LIMIT_USDS_MINT = keccak256("LIMIT_USDS_MINT");

    function mintUSDS(uint256 usdsAmount) external {
        rateLimits.triggerRateLimitDecrease(LIMIT_USDS_MINT, usdsAmount);
    }
}
"#,
    );

    let contract = &tree.contracts()[0];
    assert_eq!(contract.name, "MainnetController");
    let var = &contract.state_variables[0];
    assert_eq!(var.name, "LIMIT_USDS_MINT");
    assert_eq!(var.references.len(), 1);

    let reference = var.references[0];
    assert_eq!(tree.location(reference).line, 5);
    let callees: Vec<&str> = tree
        .ancestors(reference)
        .filter_map(|(_, kind)| match kind {
            NodeKind::FunctionCall { callee: Some(c) } => Some(c.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(callees, vec!["triggerRateLimitDecrease"]);
}

#[test]
fn test_lowering_names_modifier_invocations() {
    let tree = parse(
        r#"
contract ForeignController {
    bytes32 public constant LIMIT_PSM_DEPOSIT = keccak256("LIMIT_PSM_DEPOSIT");

    function depositPSM(address asset, uint256 amount)
        external
        rateLimitedAsset(LIMIT_PSM_DEPOSIT, asset, amount)
    {
    }
}
"#,
    );

    let reference = tree.contracts()[0].state_variables[0].references[0];
    let modifiers: Vec<&str> = tree
        .ancestors(reference)
        .filter_map(|(_, kind)| match kind {
            NodeKind::ModifierInvocation { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(modifiers, vec!["rateLimitedAsset"]);

    let obs = observe(std::iter::once(&tree)).unwrap();
    let sets = obs.get(ContractRole::Satellite).get("LIMIT_PSM_DEPOSIT").unwrap();
    assert!(sets.get(UsageKind::Decrease).contains("depositPSM"));
}

#[test]
fn test_references_do_not_cross_contracts() {
    let tree = parse(
        r#"
contract MainnetController {
    bytes32 public constant LIMIT_A = keccak256("LIMIT_A");
}

contract Unrelated {
    function f() external {
        LIMIT_A;
    }
}
"#,
    );
    assert!(tree.contracts()[0].state_variables[0].references.is_empty());
    assert!(observe(std::iter::once(&tree)).is_ok());
}

#[test]
fn test_member_access_on_other_contract_is_not_a_reference() {
    let tree = parse(
        r#"
contract MainnetController {
    bytes32 public constant LIMIT_A = keccak256("LIMIT_A");

    function peek(address other) external view returns (bytes32) {
        return IOther(other).LIMIT_A();
    }
}
"#,
    );
    assert!(tree.contracts()[0].state_variables[0].references.is_empty());
    assert!(observe(std::iter::once(&tree)).unwrap().get(ContractRole::Mainnet).is_empty());
}

#[test]
fn test_member_access_on_own_contract_is_a_reference() {
    let tree = parse(
        r#"
contract MainnetController {
    bytes32 public constant LIMIT_A = keccak256("LIMIT_A");

    function spend(uint256 amount) external {
        _rateLimited(MainnetController.LIMIT_A, amount);
    }

    function refund(uint256 amount) external {
        _cancelRateLimit(this.LIMIT_A(), amount);
    }
}
"#,
    );
    assert_eq!(tree.contracts()[0].state_variables[0].references.len(), 2);

    let obs = observe(std::iter::once(&tree)).unwrap();
    let sets = obs.get(ContractRole::Mainnet).get("LIMIT_A").unwrap();
    assert!(sets.get(UsageKind::Decrease).contains("spend"));
    assert!(sets.get(UsageKind::Increase).contains("refund"));
}

#[test]
fn test_unknown_modifier_in_source() {
    let tree = parse(
        r#"
contract MainnetController {
    bytes32 public constant LIMIT_A = keccak256("LIMIT_A");

    function f(uint256 amount) external onlyOwner(LIMIT_A) {
        _rateLimited(LIMIT_A, amount);
    }
}
"#,
    );
    let err = observe(std::iter::once(&tree)).unwrap_err();
    assert!(
        matches!(
            err,
            AuditError::Classification(ClassificationError::UnknownModifier { ref modifier, .. }) if modifier == "onlyOwner"
        ),
        "{err:?}"
    );
}

// ---- Fixtures ----

#[test]
fn test_fixtures_parse_cleanly() {
    for name in ["ForeignController.sol", "MainnetController.sol"] {
        let tree = parse(&fixture(name));
        assert!(!tree.contracts().is_empty(), "{name}");
    }
}

#[test]
fn test_fixture_observation_matches_registry() {
    let trees: Vec<SyntaxTree> = ["ForeignController.sol", "MainnetController.sol"]
        .iter()
        .map(|name| parse(&fixture(name)))
        .collect();
    let obs = observe(trees.iter()).unwrap();

    let mint = obs.get(ContractRole::Mainnet).get("LIMIT_USDS_MINT").unwrap();
    assert!(mint.get(UsageKind::Decrease).contains("mintUSDS"));
    assert!(mint.get(UsageKind::Increase).contains("burnUSDS"));

    let swap = obs.get(ContractRole::Mainnet).get("LIMIT_CURVE_SWAP").unwrap();
    assert_eq!(
        swap.get(UsageKind::Decrease).iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["addLiquidityCurve", "swapCurve"]
    );

    assert!(tollgate_analysis::verifier::verify_all(&obs).is_ok());
}

// ---- End to end ----

#[test]
fn test_audit_passes_on_compliant_project() {
    let dir = project(&[
        ("ForeignController.sol", fixture("ForeignController.sol").as_str()),
        ("MainnetController.sol", fixture("MainnetController.sol").as_str()),
    ]);
    let report = audit::run(dir.path(), &TollgateConfig::default()).unwrap();
    assert!(report.passed, "{report:?}");
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.roles.len(), 2);
}

#[test]
fn test_audit_reports_dropped_wiring() {
    let foreign = fixture("ForeignController.sol").replace(
        "rateLimitExists(RateLimitHelpers.makeAssetKey(LIMIT_4626_DEPOSIT, morphoVault))\n    {\n        psm = morphoVault;\n    }\n\n    /****",
        "\n    {\n        psm = morphoVault;\n    }\n\n    /****",
    );
    assert_ne!(foreign, fixture("ForeignController.sol"));

    let dir = project(&[
        ("ForeignController.sol", foreign.as_str()),
        ("MainnetController.sol", fixture("MainnetController.sol").as_str()),
    ]);
    let report = audit::run(dir.path(), &TollgateConfig::default()).unwrap();
    assert!(!report.passed);
    assert_eq!(
        report.roles[0].mismatches,
        vec![SpecificationMismatch::FunctionSet {
            role: ContractRole::Satellite,
            limit: "LIMIT_4626_DEPOSIT".into(),
            kind: UsageKind::Exists,
            missing: vec!["reallocateMorpho".into()],
            extra: vec![],
        }]
    );
    assert!(report.roles[1].passed);
    assert!(matches!(report.into_result(), Err(AuditError::Mismatch(_))));
}

#[test]
fn test_missing_controller_fails_verification() {
    let dir = project(&[("MainnetController.sol", fixture("MainnetController.sol").as_str())]);
    let report = audit::run(dir.path(), &TollgateConfig::default()).unwrap();
    assert!(!report.passed);
    assert!(report.roles[1].passed);
    assert_eq!(report.roles[0].mismatches[0].missing().len(), 9);
}

#[test]
fn test_syntax_errors_are_fatal_by_default() {
    let dir = project(&[("Broken.sol", "contract MainnetController { function f( { }")]);
    let err = audit::run(dir.path(), &TollgateConfig::default()).unwrap_err();
    assert!(matches!(err, AuditError::Parse(ParseError::PartialParse { .. })), "{err:?}");

    let mut config = TollgateConfig::default();
    config.scan.allow_partial_parse = Some(true);
    assert!(audit::run(dir.path(), &config).is_ok());
}

#[test]
fn test_missing_source_dir_is_a_scan_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = audit::run(dir.path(), &TollgateConfig::default()).unwrap_err();
    assert!(matches!(err, AuditError::Scan(_)), "{err:?}");
}

#[test]
fn test_cli_source_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    let contracts = dir.path().join("contracts");
    std::fs::create_dir_all(&contracts).unwrap();
    std::fs::write(contracts.join("MainnetController.sol"), fixture("MainnetController.sol")).unwrap();

    let overrides = CliOverrides {
        source_dirs: vec!["contracts".into()],
        ..CliOverrides::default()
    };
    let config = TollgateConfig::load(dir.path(), Some(&overrides)).unwrap();
    let obs = audit::observe(dir.path(), &config).unwrap();
    assert_eq!(obs.get(ContractRole::Mainnet).len(), 23);
    assert!(obs.get(ContractRole::Satellite).is_empty());
}

// ---- Reporters ----

#[test]
fn test_reporters_render_failing_report() {
    let dir = project(&[("MainnetController.sol", fixture("MainnetController.sol").as_str())]);
    let report = audit::run(dir.path(), &TollgateConfig::default()).unwrap();

    for format in available_formats() {
        let reporter = create_reporter(format, false).unwrap();
        assert_eq!(reporter.name(), *format);
        let output = reporter.generate(&report).unwrap();
        assert!(output.contains("LIMIT_4626_DEPOSIT"), "{format}: {output}");
    }

    let console = create_reporter("console", false).unwrap().generate(&report).unwrap();
    assert!(console.contains("Result: FAILED"));
    assert!(!console.contains("\x1b["));

    let json: serde_json::Value =
        serde_json::from_str(&create_reporter("json", true).unwrap().generate(&report).unwrap()).unwrap();
    assert_eq!(json["overall_passed"], false);
    assert_eq!(json["roles"][0]["mismatches"][0]["type"], "identifier_set");
    assert_eq!(json["roles"][1]["passed"], true);
}

#[test]
fn test_unknown_reporter_format() {
    assert!(create_reporter("sarif", true).is_none());
}
