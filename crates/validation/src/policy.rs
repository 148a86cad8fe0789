//! Risk policy constants
//!
//! Fixed policy, not configuration.

use rust_decimal::Decimal;

/// Risk scores strictly above this are high-risk
pub const HIGH_RISK_SCORE_THRESHOLD: i64 = 70;

/// High-risk users may not move amounts strictly above this
pub const HIGH_RISK_AMOUNT_LIMIT: Decimal = Decimal::ONE_THOUSAND;

pub const MSG_KYC_NOT_FOUND: &str = "KYC record not found";
pub const MSG_KYC_NOT_VERIFIED: &str = "KYC not verified";
pub const MSG_HIGH_RISK_LIMIT: &str = "Transaction amount exceeds limit for high-risk user";
pub const MSG_VALIDATED: &str = "Transaction validated successfully";

/// Both conditions must hold, each strictly
pub fn exceeds_risk_limit(risk_score: i64, amount: Decimal) -> bool {
    risk_score > HIGH_RISK_SCORE_THRESHOLD && amount > HIGH_RISK_AMOUNT_LIMIT
}
