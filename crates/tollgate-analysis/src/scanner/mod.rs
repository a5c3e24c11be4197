//! Scanner subsystem: Solidity file discovery and content hashing.
//!
//! The scanner is the entry point of an audit: it walks the configured
//! source directories, keeps `.sol` files, and reads them into memory.

pub mod hasher;
pub mod scanner;
pub mod types;
pub mod walker;

pub use scanner::Scanner;
pub use types::{ScanStats, SourceFile};
