//! Transaction records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::record::JsonRecord;

/// Transaction status
///
/// Records are written once in their terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Completed,
}

/// A recorded cross-currency money movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub from_address: String,
    pub to_address: String,
    /// Serialized as a decimal string
    pub amount: Decimal,
    pub source_currency: String,
    pub destination_currency: String,
    #[serde(default)]
    pub memo: String,
    /// Caller-supplied timestamp, stored verbatim
    pub timestamp: String,
    pub status: TransactionStatus,
}

impl TransactionRecord {
    /// Create a completed transaction
    pub fn new(
        transaction_id: impl Into<String>,
        from_address: impl Into<String>,
        to_address: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount,
            source_currency: String::new(),
            destination_currency: String::new(),
            memo: String::new(),
            timestamp: String::new(),
            status: TransactionStatus::Completed,
        }
    }

    /// Set source and destination currencies
    pub fn with_currencies(
        mut self,
        source_currency: impl Into<String>,
        destination_currency: impl Into<String>,
    ) -> Self {
        self.source_currency = source_currency.into();
        self.destination_currency = destination_currency.into();
        self
    }

    /// Set memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

impl JsonRecord for TransactionRecord {
    const ENTITY: &'static str = "transaction";
}
