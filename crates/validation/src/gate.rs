//! Validation Gate

use std::sync::Arc;

use kycledger_compliance::{ComplianceLog, TRANSACTION_VALIDATION};
use kycledger_core::{Clock, Collections, ProposedTransaction, ValidationResult};
use kycledger_identity::IdentityStore;
use kycledger_state::LedgerState;

use crate::policy::{
    exceeds_risk_limit, MSG_HIGH_RISK_LIMIT, MSG_KYC_NOT_FOUND, MSG_KYC_NOT_VERIFIED, MSG_VALIDATED,
};

/// Approves or rejects proposed transactions from identity and risk state
pub struct ValidationGate<'a, S: LedgerState + ?Sized> {
    identity: IdentityStore<'a, S>,
    log: ComplianceLog<'a, S>,
}

impl<'a, S: LedgerState + ?Sized> ValidationGate<'a, S> {
    pub fn new(state: &'a S, collections: &Collections, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity: IdentityStore::new(state, collections, Arc::clone(&clock)),
            log: ComplianceLog::new(state, collections.compliance.clone(), clock),
        }
    }

    /// Validate `proposed` for the identity registered at `address`
    ///
    /// Any failure to resolve the identity is a "not found" verdict. Only an
    /// approval writes state: a "Transaction Validation" compliance entry
    /// keyed by the identity's user ID. A failure to write that entry is
    /// logged and does not change the verdict.
    pub fn validate_transaction(&self, address: &str, proposed: &ProposedTransaction) -> ValidationResult {
        let record = match self.identity.get_kyc_status(address) {
            Ok(lookup) => lookup.into_record(),
            Err(err) => {
                if !err.is_not_found() {
                    tracing::warn!(address = %address, error = %err, "KYC lookup failed during validation");
                }
                return ValidationResult::rejected(MSG_KYC_NOT_FOUND);
            }
        };

        if !record.kyc_verified {
            tracing::debug!(address = %address, "Rejected: KYC not verified");
            return ValidationResult::rejected(MSG_KYC_NOT_VERIFIED);
        }

        if exceeds_risk_limit(record.risk_score, proposed.amount) {
            tracing::debug!(
                address = %address,
                risk_score = record.risk_score,
                amount = %proposed.amount,
                "Rejected: high-risk limit"
            );
            return ValidationResult::rejected(MSG_HIGH_RISK_LIMIT);
        }

        let description = format!(
            "Transaction {} validated for {:.6} {} to {}",
            proposed.transaction_id, proposed.amount, proposed.currency, proposed.destination
        );
        if let Err(err) = self.log.record(&record.user_id, TRANSACTION_VALIDATION, &description) {
            tracing::warn!(
                transaction_id = %proposed.transaction_id,
                error = %err,
                "Failed to record transaction validation"
            );
        }

        tracing::info!(
            transaction_id = %proposed.transaction_id,
            user_id = %record.user_id,
            "Transaction validated"
        );
        ValidationResult::valid(MSG_VALIDATED)
    }
}
