//! Core errors

use thiserror::Error;

/// Errors raised while building keys or decoding stored records
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid composite key: {0}")]
    InvalidCompositeKey(String),

    #[error("Invalid simple key: {0:?}")]
    InvalidSimpleKey(String),

    #[error("Malformed {entity} record: {source}")]
    MalformedRecord {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
