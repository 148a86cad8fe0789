//! Transaction ledger errors

use kycledger_core::CoreError;
use kycledger_state::StateError;
use thiserror::Error;

/// Errors that can occur in transaction ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("transactionId cannot be empty")]
    EmptyTransactionId,

    #[error("{0} cannot be empty")]
    EmptyAddress(&'static str),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("Invalid transaction record: {0}")]
    Record(#[from] CoreError),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
