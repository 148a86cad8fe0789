//! Exported function names

use strum_macros::{Display, EnumString};

/// Functions callable through [`KycContract::invoke`](crate::KycContract::invoke)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum ContractFunction {
    InitLedger,
    #[strum(serialize = "StoreKYC")]
    StoreKyc,
    #[strum(serialize = "GetKYCStatus")]
    GetKycStatus,
    #[strum(serialize = "UpdateKYCStatus")]
    UpdateKycStatus,
    RecordComplianceEvent,
    ValidateTransaction,
    #[strum(serialize = "QueryKYCByCountry")]
    QueryKycByCountry,
    RecordTransaction,
    GetTransaction,
    GetTransactionsByAddress,
}

impl ContractFunction {
    /// Number of string arguments the function takes
    pub fn arity(&self) -> usize {
        match self {
            ContractFunction::InitLedger => 0,
            ContractFunction::StoreKyc => 7,
            ContractFunction::GetKycStatus => 1,
            ContractFunction::UpdateKycStatus => 4,
            ContractFunction::RecordComplianceEvent => 3,
            ContractFunction::ValidateTransaction => 2,
            ContractFunction::QueryKycByCountry => 1,
            ContractFunction::RecordTransaction => 8,
            ContractFunction::GetTransaction => 1,
            ContractFunction::GetTransactionsByAddress => 1,
        }
    }

    /// Whether the function writes state
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            ContractFunction::StoreKyc
                | ContractFunction::UpdateKycStatus
                | ContractFunction::RecordComplianceEvent
                | ContractFunction::ValidateTransaction
                | ContractFunction::RecordTransaction
        )
    }
}
