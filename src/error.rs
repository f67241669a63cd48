//! Error taxonomy for catalog loading, matching and rotation planning.

use thiserror::Error;

/// Errors surfaced by the crop advisor core.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Catalog source missing, malformed, or failing validation.
    /// Fatal at startup; there is nothing to retry.
    #[error("Crop catalog unavailable ({source_name}): {reason}")]
    DataUnavailable { source_name: String, reason: String },

    /// Unparsable or missing user criterion. Request-scoped.
    #[error("{0}")]
    InvalidInput(String),

    /// A crop name absent from the catalog.
    #[error("Crop '{0}' not found in catalog")]
    NotFound(String),
}

impl AdvisorError {
    pub fn data_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        AdvisorError::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        AdvisorError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
