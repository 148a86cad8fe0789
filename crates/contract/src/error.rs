//! Contract errors

use kycledger_compliance::ComplianceError;
use kycledger_core::CoreError;
use kycledger_identity::IdentityError;
use kycledger_ledger::LedgerError;
use thiserror::Error;

/// A failed request
///
/// Business rejections from the validation gate are not errors; they come
/// back as a successful response carrying `isValid: false`.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function} expects {expected} arguments, got {actual}")]
    IncorrectArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Compliance(#[from] ComplianceError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Record(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for contract calls
pub type ContractResult<T> = Result<T, ContractError>;
