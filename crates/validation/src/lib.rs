//! KYC Ledger Validation Gate
//!
//! Decides whether a proposed transaction may proceed for an address:
//!
//! 1. no KYC record            → rejected, "KYC record not found"
//! 2. KYC not verified         → rejected, "KYC not verified"
//! 3. high risk and large      → rejected, "Transaction amount exceeds limit for high-risk user"
//! 4. otherwise                → approved, logged to the compliance trail
//!
//! Rejections are verdicts, not errors, and write nothing.

pub mod gate;
pub mod policy;

pub use gate::ValidationGate;
pub use policy::{
    exceeds_risk_limit, HIGH_RISK_AMOUNT_LIMIT, HIGH_RISK_SCORE_THRESHOLD, MSG_HIGH_RISK_LIMIT,
    MSG_KYC_NOT_FOUND, MSG_KYC_NOT_VERIFIED, MSG_VALIDATED,
};
