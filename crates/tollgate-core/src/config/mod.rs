//! Configuration system for tollgate.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.
//!
//! Only the scan and report surfaces are configurable. The expected
//! rate-limit tables are compiled in and have no config knob.

pub mod report_config;
pub mod scan_config;
pub mod tollgate_config;

pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;
pub use tollgate_config::{CliOverrides, TollgateConfig};
