//! Scanner: discovery followed by parallel reads.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tollgate_core::config::ScanConfig;
use tollgate_core::errors::ScanError;

use super::hasher::hash_content;
use super::types::{ScanStats, SourceFile};
use super::walker::discover;

pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Discover and read every Solidity source under `root`, sorted by path.
    pub fn scan(&self, root: &Path) -> Result<(Vec<SourceFile>, ScanStats), ScanError> {
        let started = Instant::now();
        let mut stats = ScanStats::default();
        let discovered = discover(root, &self.config, &mut stats)?;
        stats.discovery_ms = started.elapsed().as_millis() as u64;

        let files = discovered
            .par_iter()
            .map(|d| {
                let content = std::fs::read(&d.path).map_err(|source| ScanError::Io {
                    path: d.path.clone(),
                    source,
                })?;
                let relative = d.path.strip_prefix(root).unwrap_or(&d.path);
                Ok(SourceFile {
                    path: d.path.clone(),
                    display_path: relative.to_string_lossy().replace('\\', "/"),
                    content_hash: hash_content(&content),
                    content,
                })
            })
            .collect::<Result<Vec<_>, ScanError>>()?;

        stats.total_files = files.len();
        stats.total_size_bytes = discovered.iter().map(|d| d.file_size).sum();

        tracing::info!(
            files = stats.total_files,
            bytes = stats.total_size_bytes,
            skipped_large = stats.files_skipped_large,
            "scan complete"
        );
        Ok((files, stats))
    }
}
