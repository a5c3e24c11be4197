//! # tollgate-core
//!
//! Core types, errors, configuration and tracing shared by the tollgate
//! analysis engine and its command-line front end.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
