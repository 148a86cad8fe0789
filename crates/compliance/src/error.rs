//! Compliance errors

use kycledger_core::CoreError;
use kycledger_state::StateError;
use thiserror::Error;

/// Errors from the Compliance Log
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Failed to write compliance record: {0}")]
    LedgerWriteError(#[from] StateError),

    #[error("Invalid compliance record: {0}")]
    RecordError(#[from] CoreError),
}

/// Result type for compliance operations
pub type ComplianceResult<T> = Result<T, ComplianceError>;
