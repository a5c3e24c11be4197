//! Directory walking with `.gitignore` support.

use std::collections::BTreeSet;
use std::path::Path;

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use tollgate_core::config::ScanConfig;
use tollgate_core::constants::SOLIDITY_EXTENSION;
use tollgate_core::errors::ScanError;

use super::types::{DiscoveredFile, ScanStats};

/// Discover Solidity files under each configured source directory of `root`.
/// Overlapping directories are deduplicated; output is sorted by path.
pub fn discover(
    root: &Path,
    config: &ScanConfig,
    stats: &mut ScanStats,
) -> Result<Vec<DiscoveredFile>, ScanError> {
    let max_file_size = config.effective_max_file_size();
    let mut found = BTreeSet::new();

    for dir in config.effective_source_dirs() {
        let base = root.join(&dir);
        if !base.is_dir() {
            return Err(ScanError::SourceDirNotFound { path: base });
        }

        let mut overrides = OverrideBuilder::new(&base);
        for glob in &config.extra_ignore {
            overrides
                .add(&format!("!{glob}"))
                .map_err(|e| ScanError::Walk {
                    message: format!("invalid ignore glob '{glob}': {e}"),
                })?;
        }
        let overrides = overrides.build().map_err(|e| ScanError::Walk {
            message: e.to_string(),
        })?;

        let walker = WalkBuilder::new(&base)
            .follow_links(config.effective_follow_symlinks())
            .require_git(false)
            .overrides(overrides)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| ScanError::Walk {
                message: e.to_string(),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SOLIDITY_EXTENSION) {
                continue;
            }
            let file_size = entry
                .metadata()
                .map(|m| m.len())
                .map_err(|e| ScanError::Walk {
                    message: e.to_string(),
                })?;
            if file_size > max_file_size {
                tracing::warn!(path = %path.display(), file_size, max_file_size, "skipping large file");
                stats.files_skipped_large += 1;
                continue;
            }
            found.insert(DiscoveredFile {
                path: path.to_path_buf(),
                file_size,
            });
        }
    }

    Ok(found.into_iter().collect())
}
