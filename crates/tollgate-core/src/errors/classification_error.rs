//! Classification errors: a reference matched no known usage pattern.

use crate::types::SourceLocation;

use super::error_code::{self, TollgateErrorCode};

/// Raised when a rate-limit reference cannot be tagged with a usage kind.
/// Names are reported verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Reference to {limit} in {function} at {location} has neither a modifier nor a function call")]
    BareReference {
        limit: String,
        function: String,
        location: SourceLocation,
    },

    #[error("Unknown modifier called: {modifier} (reference to {limit} in {function} at {location})")]
    UnknownModifier {
        limit: String,
        function: String,
        modifier: String,
        location: SourceLocation,
    },

    #[error("Unknown function called in chain: {} (reference to {limit} in {function} at {location})", .chain.join(", "))]
    UnknownCallChain {
        limit: String,
        function: String,
        chain: Vec<String>,
        location: SourceLocation,
    },
}

impl ClassificationError {
    /// The rate-limit identifier whose reference failed to classify.
    pub fn limit(&self) -> &str {
        match self {
            Self::BareReference { limit, .. }
            | Self::UnknownModifier { limit, .. }
            | Self::UnknownCallChain { limit, .. } => limit,
        }
    }
}

impl TollgateErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFICATION_ERROR
    }
}
