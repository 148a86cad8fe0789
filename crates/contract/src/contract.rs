//! KYC contract - one request in, one response out

use std::sync::Arc;

use kycledger_compliance::ComplianceLog;
use kycledger_core::{
    Clock, Collections, ComplianceRecord, JsonRecord, KycRecord, ProposedTransaction, SystemClock,
    TransactionRecord, ValidationResult,
};
use kycledger_identity::{IdentityStore, KycLookup, KycUpdate};
use kycledger_ledger::TransactionLedger;
use kycledger_state::LedgerState;
use kycledger_validation::ValidationGate;

use crate::args::{parse_bool, parse_decimal, parse_int};
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::function::ContractFunction;

/// Contract over a ledger state
///
/// Components are created per call and borrow the state for that call only;
/// the contract itself keeps no request data between calls.
pub struct KycContract<S: LedgerState> {
    state: S,
    collections: Collections,
    clock: Arc<dyn Clock>,
}

impl<S: LedgerState> KycContract<S> {
    /// Create a contract using the wall clock
    pub fn new(state: S, config: &ContractConfig) -> Self {
        Self {
            state,
            collections: config.collections(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying state
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn identity(&self) -> IdentityStore<'_, S> {
        IdentityStore::new(&self.state, &self.collections, Arc::clone(&self.clock))
    }

    pub fn compliance(&self) -> ComplianceLog<'_, S> {
        ComplianceLog::new(
            &self.state,
            self.collections.compliance.clone(),
            Arc::clone(&self.clock),
        )
    }

    pub fn ledger(&self) -> TransactionLedger<'_, S> {
        TransactionLedger::new(&self.state)
    }

    pub fn gate(&self) -> ValidationGate<'_, S> {
        ValidationGate::new(&self.state, &self.collections, Arc::clone(&self.clock))
    }

    // === Operations ===

    pub fn init_ledger(&self) {
        tracing::info!(
            kyc_collection = %self.collections.kyc_private,
            compliance_collection = %self.collections.compliance,
            "Initializing the ledger"
        );
    }

    pub fn store_kyc(&self, record: &KycRecord) -> ContractResult<()> {
        Ok(self.identity().store_kyc(record)?)
    }

    pub fn get_kyc_status(&self, address: &str) -> ContractResult<KycLookup> {
        Ok(self.identity().get_kyc_status(address)?)
    }

    pub fn update_kyc_status(
        &self,
        user_id: &str,
        address: &str,
        verified: bool,
        reason: &str,
    ) -> ContractResult<KycUpdate> {
        Ok(self
            .identity()
            .update_kyc_status(user_id, address, verified, reason)?)
    }

    pub fn record_compliance_event(
        &self,
        user_id: &str,
        action: &str,
        description: &str,
    ) -> ContractResult<ComplianceRecord> {
        Ok(self.compliance().record(user_id, action, description)?)
    }

    pub fn validate_transaction(&self, address: &str, proposed: &ProposedTransaction) -> ValidationResult {
        self.gate().validate_transaction(address, proposed)
    }

    pub fn query_kyc_by_country(&self, country_code: &str) -> ContractResult<Vec<KycRecord>> {
        let records = self
            .identity()
            .query_by_country(country_code)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn record_transaction(&self, record: TransactionRecord) -> ContractResult<TransactionRecord> {
        Ok(self.ledger().record_transaction(record)?)
    }

    pub fn get_transaction(&self, transaction_id: &str) -> ContractResult<TransactionRecord> {
        Ok(self.ledger().get_transaction(transaction_id)?)
    }

    pub fn get_transactions_by_address(&self, address: &str) -> ContractResult<Vec<TransactionRecord>> {
        Ok(self.ledger().get_transactions_by_address(address)?)
    }

    // === Dispatch ===

    /// Run one exported function with string arguments
    ///
    /// Returns the JSON response body; functions that only write return an
    /// empty body.
    pub fn invoke(&self, function: &str, args: &[&str]) -> ContractResult<Vec<u8>> {
        let parsed: ContractFunction = function
            .parse()
            .map_err(|_| ContractError::UnknownFunction(function.to_string()))?;

        if args.len() != parsed.arity() {
            return Err(ContractError::IncorrectArgumentCount {
                function: parsed.to_string(),
                expected: parsed.arity(),
                actual: args.len(),
            });
        }

        tracing::debug!(function = %parsed, write = parsed.is_write(), "Invoking");

        let result = self.dispatch(parsed, args);
        if let Err(err) = &result {
            tracing::warn!(function = %parsed, error = %err, "Request failed");
        }
        result
    }

    fn dispatch(&self, function: ContractFunction, args: &[&str]) -> ContractResult<Vec<u8>> {
        match function {
            ContractFunction::InitLedger => {
                self.init_ledger();
                Ok(Vec::new())
            }
            ContractFunction::StoreKyc => {
                let record = KycRecord::new(args[0], args[1], args[2])
                    .with_verification(parse_bool("kycVerified", args[3])?, args[4])
                    .with_risk_score(parse_int("riskScore", args[5])?)
                    .with_country(args[6]);
                self.store_kyc(&record)?;
                Ok(Vec::new())
            }
            ContractFunction::GetKycStatus => {
                let record = self.get_kyc_status(args[0])?.into_record();
                Ok(record.to_json()?)
            }
            ContractFunction::UpdateKycStatus => {
                let verified = parse_bool("kycVerified", args[2])?;
                self.update_kyc_status(args[0], args[1], verified, args[3])?;
                Ok(Vec::new())
            }
            ContractFunction::RecordComplianceEvent => {
                self.record_compliance_event(args[0], args[1], args[2])?;
                Ok(Vec::new())
            }
            ContractFunction::ValidateTransaction => {
                let proposed = ProposedTransaction::from_json(args[1].as_bytes()).map_err(|e| {
                    ContractError::InvalidArgument {
                        name: "transactionJson",
                        reason: e.to_string(),
                    }
                })?;
                let verdict = self.validate_transaction(args[0], &proposed);
                Ok(serde_json::to_vec(&verdict)?)
            }
            ContractFunction::QueryKycByCountry => {
                let records = self.query_kyc_by_country(args[0])?;
                Ok(serde_json::to_vec(&records)?)
            }
            ContractFunction::RecordTransaction => {
                let record = TransactionRecord::new(
                    args[0],
                    args[1],
                    args[2],
                    parse_decimal("amount", args[3])?,
                )
                .with_currencies(args[4], args[5])
                .with_memo(args[6])
                .with_timestamp(args[7]);
                self.record_transaction(record)?;
                Ok(Vec::new())
            }
            ContractFunction::GetTransaction => {
                let record = self.get_transaction(args[0])?;
                Ok(record.to_json()?)
            }
            ContractFunction::GetTransactionsByAddress => {
                let records = self.get_transactions_by_address(args[0])?;
                Ok(serde_json::to_vec(&records)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kycledger_state::MemoryState;

    fn contract() -> KycContract<MemoryState> {
        KycContract::new(MemoryState::new(), &ContractConfig::default())
    }

    #[test]
    fn test_unknown_function() {
        let err = contract().invoke("DeleteKYC", &["x"]).unwrap_err();
        assert!(matches!(err, ContractError::UnknownFunction(name) if name == "DeleteKYC"));
    }

    #[test]
    fn test_argument_count_checked() {
        let err = contract().invoke("GetKYCStatus", &[]).unwrap_err();
        assert!(matches!(
            err,
            ContractError::IncorrectArgumentCount { expected: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn test_init_ledger_writes_nothing() {
        let contract = contract();
        assert!(contract.invoke("InitLedger", &[]).unwrap().is_empty());
        assert!(contract.state().public_keys().is_empty());
    }

    #[test]
    fn test_store_kyc_rejects_bad_types() {
        let contract = contract();
        let err = contract
            .invoke("StoreKYC", &["U1", "A1", "Name", "maybe", "", "10", "VN"])
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { name: "kycVerified", .. }));

        let err = contract
            .invoke("StoreKYC", &["U1", "A1", "Name", "true", "", "high", "VN"])
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { name: "riskScore", .. }));
        assert!(contract.state().public_keys().is_empty());
    }

    #[test]
    fn test_malformed_transaction_json_fails_request() {
        let contract = contract();
        let err = contract
            .invoke("ValidateTransaction", &["A1", "{not json"])
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { name: "transactionJson", .. }));
    }

    #[test]
    fn test_missing_kyc_is_error_for_get() {
        let err = contract().invoke("GetKYCStatus", &["Nobody"]).unwrap_err();
        assert_eq!(err.to_string(), "no KYC record found for address Nobody");
    }
}
