//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SOURCE_DIR};

/// Where to look for Solidity sources and how to read them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories, relative to the audit root, to scan. Default: `["src"]`.
    pub source_dirs: Vec<String>,
    /// Extra ignore globs on top of `.gitignore`.
    pub extra_ignore: Vec<String>,
    /// Maximum file size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Parser threads. Default: rayon's choice.
    pub threads: Option<usize>,
    /// Accept trees with syntax errors instead of failing. Default: false.
    pub allow_partial_parse: Option<bool>,
}

impl ScanConfig {
    pub fn effective_source_dirs(&self) -> Vec<String> {
        if self.source_dirs.is_empty() {
            vec![DEFAULT_SOURCE_DIR.to_string()]
        } else {
            self.source_dirs.clone()
        }
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_allow_partial_parse(&self) -> bool {
        self.allow_partial_parse.unwrap_or(false)
    }
}
