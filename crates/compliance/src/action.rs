//! Action names written by the built-in components

/// Logged by the identity store on every status update
pub const KYC_STATUS_UPDATE: &str = "KYC Status Update";

/// Logged by the validation gate on every approved transaction
pub const TRANSACTION_VALIDATION: &str = "Transaction Validation";
