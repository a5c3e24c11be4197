//! Scanner data types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A discovered source file, read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the audit root, with `/` separators.
    pub display_path: String,
    pub content: Vec<u8>,
    pub content_hash: u64,
}

/// A file found by the walker, not yet read.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub file_size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub files_skipped_large: usize,
    pub discovery_ms: u64,
}
