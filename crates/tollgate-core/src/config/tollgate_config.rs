//! Top-level tollgate configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report_config::REPORT_FORMATS;
use super::{ReportConfig, ScanConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TOLLGATE_*`)
/// 3. Project config (`tollgate.toml` in the audit root)
/// 4. User config (`~/.tollgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TollgateConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_dirs: Vec<String>,
    pub report_format: Option<String>,
    pub report_color: Option<bool>,
    pub scan_threads: Option<usize>,
}

impl TollgateConfig {
    /// Load configuration for the audit rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TollgateConfig) -> Result<(), ConfigError> {
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(threads) = config.scan.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for dir in &config.scan.source_dirs {
            if Path::new(dir).is_absolute() || dir.split(['/', '\\']).any(|c| c == "..") {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.source_dirs".to_string(),
                    message: format!("'{dir}' must be a relative path inside the audit root"),
                });
            }
        }
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("must be one of {}", REPORT_FORMATS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tollgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".tollgate").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TollgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TollgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut TollgateConfig, other: &TollgateConfig) {
        // Scan
        if !other.scan.source_dirs.is_empty() {
            base.scan.source_dirs = other.scan.source_dirs.clone();
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.allow_partial_parse.is_some() {
            base.scan.allow_partial_parse = other.scan.allow_partial_parse;
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TOLLGATE_SCAN_MAX_FILE_SIZE`, `TOLLGATE_REPORT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut TollgateConfig) {
        if let Ok(val) = std::env::var("TOLLGATE_SCAN_SOURCE_DIRS") {
            let dirs: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !dirs.is_empty() {
                config.scan.source_dirs = dirs;
            }
        }
        if let Ok(val) = std::env::var("TOLLGATE_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOLLGATE_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOLLGATE_SCAN_ALLOW_PARTIAL_PARSE") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.allow_partial_parse = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TOLLGATE_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("TOLLGATE_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TollgateConfig, cli: &CliOverrides) {
        if !cli.source_dirs.is_empty() {
            config.scan.source_dirs = cli.source_dirs.clone();
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_color {
            config.report.color = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
