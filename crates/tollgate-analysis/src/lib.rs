//! tollgate-analysis: audits how a controller contract's rate-limit
//! identifiers are wired into its functions.
//!
//! Pipeline: scan → parse → lower → classify → verify → report.

pub mod audit;
pub mod classifier;
pub mod parsers;
pub mod registry;
pub mod reporters;
pub mod scanner;
pub mod syntax;
pub mod verifier;

pub use audit::{run, AuditReport, RoleReport};
pub use classifier::RoleObservations;
