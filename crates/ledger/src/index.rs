//! Address index keys

use kycledger_core::{CompositeKey, CoreError, CoreResult};
use strum_macros::{Display, EnumIter};

/// Which side of a transaction an index entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum IndexDirection {
    /// Sender index, object type `from~tx`
    #[strum(serialize = "from~tx")]
    From,
    /// Recipient index, object type `to~tx`
    #[strum(serialize = "to~tx")]
    To,
}

impl IndexDirection {
    /// Composite key object type
    pub fn object_type(&self) -> &'static str {
        match self {
            IndexDirection::From => "from~tx",
            IndexDirection::To => "to~tx",
        }
    }

    /// Encoded index key for `address` and `transaction_id`
    pub fn key(&self, address: &str, transaction_id: &str) -> CoreResult<String> {
        Ok(CompositeKey::new(self.object_type(), [address, transaction_id])?.encode())
    }

    /// Extract the transaction ID from an encoded index key
    pub fn transaction_id(key: &str) -> CoreResult<String> {
        let mut parsed = CompositeKey::split(key)?;
        match parsed.attributes.len() {
            2 => Ok(parsed.attributes.remove(1)),
            n => Err(CoreError::InvalidCompositeKey(format!(
                "index key {:?} has {} attributes, expected 2",
                parsed.object_type, n
            ))),
        }
    }
}
