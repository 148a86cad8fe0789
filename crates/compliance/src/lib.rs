//! KYC Ledger Compliance Log
//!
//! Append-only audit trail stored in the `complianceRecords` private
//! collection. Written by the identity store on status changes and by the
//! validation gate on approved transactions; nothing ever rewrites or deletes
//! an entry.
//!
//! ## Known collision window
//!
//! Keys are `userId_action_timestamp` with one-second timestamps. A second
//! event for the same user and action inside the same second lands on the
//! same key and replaces the first (last write wins).

pub mod action;
pub mod error;
pub mod log;

pub use action::{KYC_STATUS_UPDATE, TRANSACTION_VALIDATION};
pub use error::{ComplianceError, ComplianceResult};
pub use log::ComplianceLog;
