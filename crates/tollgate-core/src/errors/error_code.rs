//! TollgateErrorCode trait for stable diagnostic codes.

/// Every error enum implements this to expose a structured code string
/// that scripts can match on without parsing messages.
pub trait TollgateErrorCode {
    /// Returns the code string (e.g., "SPEC_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const STRUCTURAL_ERROR: &str = "STRUCTURAL_ERROR";
pub const CLASSIFICATION_ERROR: &str = "CLASSIFICATION_ERROR";
pub const SPEC_MISMATCH: &str = "SPEC_MISMATCH";
