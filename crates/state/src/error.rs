//! State access errors

use kycledger_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Collection {0} is not readable by this peer")]
    CollectionAccessDenied(String),

    #[error("Invalid key: {0}")]
    InvalidKey(#[from] CoreError),
}

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;
