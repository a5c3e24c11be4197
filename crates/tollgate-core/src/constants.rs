//! Fixed vocabulary and defaults.

/// Prefix every audited rate-limit state variable carries.
pub const LIMIT_PREFIX: &str = "LIMIT";

/// Extension of the source files the scanner picks up.
pub const SOLIDITY_EXTENSION: &str = "sol";

/// Source directory scanned when none is configured.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Project-level config file, resolved relative to the audit root.
pub const PROJECT_CONFIG_FILE: &str = "tollgate.toml";

/// Files larger than this are skipped unless configured otherwise. 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "TOLLGATE_LOG";
