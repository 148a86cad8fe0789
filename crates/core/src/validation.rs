//! Validation request and verdict

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::JsonRecord;

/// A transaction submitted for validation
///
/// `amount` accepts a JSON number or a decimal string. Missing fields take
/// their zero value; only a payload that is not a JSON object of this shape
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedTransaction {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub destination: String,
}

impl ProposedTransaction {
    pub fn new(
        transaction_id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            currency: currency.into(),
            destination: destination.into(),
        }
    }
}

impl JsonRecord for ProposedTransaction {
    const ENTITY: &'static str = "proposed transaction";
}

/// Verdict of the validation gate
///
/// A rejection is a normal verdict, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Approved verdict
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    /// Rejected verdict
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_from_number_or_string() {
        let numeric = ProposedTransaction::from_json(
            br#"{"transactionId":"TX-1","amount":1000.5,"currency":"SOL","destination":"B"}"#,
        )
        .unwrap();
        assert_eq!(numeric.amount, dec!(1000.5));

        let text = ProposedTransaction::from_json(br#"{"transactionId":"TX-1","amount":"42"}"#)
            .unwrap();
        assert_eq!(text.amount, dec!(42));
        assert_eq!(text.currency, "");
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let proposed =
            ProposedTransaction::from_json(br#"{"amount":500,"currency":"SOL","destination":"B"}"#)
                .unwrap();
        assert_eq!(proposed.transaction_id, "");
        assert_eq!(proposed.amount, dec!(500));

        let empty = ProposedTransaction::from_json(b"{}").unwrap();
        assert_eq!(empty, ProposedTransaction::new("", Decimal::ZERO, "", ""));
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(ProposedTransaction::from_json(b"not json").is_err());
        assert!(ProposedTransaction::from_json(br#"{"amount":"lots"}"#).is_err());
        assert!(ProposedTransaction::from_json(br#"{"transactionId":7}"#).is_err());
    }

    #[test]
    fn test_result_wire_format() {
        let json = serde_json::to_string(&ValidationResult::rejected("KYC not verified")).unwrap();
        assert_eq!(json, r#"{"isValid":false,"message":"KYC not verified"}"#);
    }
}
