//! Identity store errors

use kycledger_core::CoreError;
use kycledger_state::StateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("no KYC record found for address {0}")]
    NotFound(String),

    #[error("Invalid address {0:?}: must be non-empty and must not start with U+0000")]
    InvalidAddress(String),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Invalid KYC record: {0}")]
    Record(#[from] CoreError),
}

impl IdentityError {
    /// Check if this is a missing-record error
    pub fn is_not_found(&self) -> bool {
        matches!(self, IdentityError::NotFound(_))
    }
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;
