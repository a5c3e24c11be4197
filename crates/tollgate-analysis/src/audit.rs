//! Audit pipeline: scan → parse → classify → verify.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tollgate_core::config::{ScanConfig, TollgateConfig};
use tollgate_core::errors::{AuditError, ParseError, SpecificationMismatch};
use tollgate_core::types::{ContractObservation, ContractRole};

use crate::classifier::{self, RoleObservations};
use crate::parsers::{LanguageParser, ParsedSource, SolidityParser};
use crate::registry;
use crate::scanner::{Scanner, SourceFile};
use crate::verifier;

/// Outcome of verifying one role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleReport {
    pub role: ContractRole,
    pub contract: &'static str,
    pub observation: ContractObservation,
    pub mismatches: Vec<SpecificationMismatch>,
    pub passed: bool,
}

/// Outcome of a full audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub files_scanned: usize,
    pub roles: Vec<RoleReport>,
    pub passed: bool,
    pub duration_ms: u64,
}

impl AuditReport {
    /// Build a report by diffing each role's observation against the registry.
    pub fn from_observations(observations: &RoleObservations, files_scanned: usize) -> Self {
        let roles: Vec<RoleReport> = ContractRole::ALL
            .into_iter()
            .map(|role| {
                let observation = observations.get(role).clone();
                let mismatches =
                    verifier::diff(role, &observation, &registry::specification(role));
                RoleReport {
                    role,
                    contract: role.contract_name(),
                    passed: mismatches.is_empty(),
                    observation,
                    mismatches,
                }
            })
            .collect();
        let passed = roles.iter().all(|r| r.passed);
        Self {
            files_scanned,
            roles,
            passed,
            duration_ms: 0,
        }
    }

    pub fn mismatch_count(&self) -> usize {
        self.roles.iter().map(|r| r.mismatches.len()).sum()
    }

    /// `Ok` when compliant, otherwise the first mismatch.
    pub fn into_result(self) -> Result<Self, AuditError> {
        let first = self
            .roles
            .iter()
            .flat_map(|r| r.mismatches.iter())
            .next()
            .cloned();
        match first {
            Some(mismatch) => Err(AuditError::Mismatch(mismatch)),
            None => Ok(self),
        }
    }
}

/// Parse every source file, in parallel. Syntax errors are fatal unless
/// `allow_partial_parse` is set.
pub fn parse_sources(
    files: &[SourceFile],
    config: &ScanConfig,
) -> Result<Vec<ParsedSource>, AuditError> {
    let parser = SolidityParser::new();
    let parse_all = || {
        files
            .par_iter()
            .map(|f| parser.parse(&f.content, Path::new(&f.display_path)))
            .collect::<Result<Vec<_>, ParseError>>()
    };

    let parsed = match config.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(parse_all)?,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to the global thread pool");
                parse_all()?
            }
        },
        None => parse_all()?,
    };

    let allow_partial = config.effective_allow_partial_parse();
    for source in &parsed {
        if !source.has_errors {
            continue;
        }
        let first_line = source
            .error_ranges
            .first()
            .map(|r| r.start.line + 1)
            .unwrap_or(0);
        if !allow_partial {
            return Err(ParseError::PartialParse {
                path: source.file.clone().into(),
                error_count: source.error_count,
                first_line,
            }
            .into());
        }
        tracing::warn!(
            file = %source.file,
            error_count = source.error_count,
            first_line,
            "using partial parse"
        );
    }

    Ok(parsed)
}

/// Scan, parse and classify, stopping before verification.
pub fn observe(root: &Path, config: &TollgateConfig) -> Result<RoleObservations, AuditError> {
    let (observations, _) = observe_with_count(root, config)?;
    Ok(observations)
}

fn observe_with_count(
    root: &Path,
    config: &TollgateConfig,
) -> Result<(RoleObservations, usize), AuditError> {
    let (files, _stats) = Scanner::new(config.scan.clone()).scan(root)?;
    let parsed = parse_sources(&files, &config.scan)?;
    let observations = classifier::observe(parsed.iter().map(|p| &p.syntax))?;
    Ok((observations, files.len()))
}

/// Run the full audit. Structural and classification errors abort with
/// `Err`; mismatches are collected into the report. Use
/// [`AuditReport::into_result`] to treat a failing report as an error.
pub fn run(root: &Path, config: &TollgateConfig) -> Result<AuditReport, AuditError> {
    let started = Instant::now();
    tracing::info!(root = %root.display(), "starting rate-limit audit");

    let (observations, files_scanned) = observe_with_count(root, config)?;
    let mut report = AuditReport::from_observations(&observations, files_scanned);
    report.duration_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        passed = report.passed,
        mismatches = report.mismatch_count(),
        duration_ms = report.duration_ms,
        "audit complete"
    );
    Ok(report)
}
