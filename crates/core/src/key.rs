//! State keys
//!
//! Simple keys are plain strings (`tx_<id>`, the user's address, ...).
//! Composite keys follow the host ledger convention:
//!
//! `\0 OBJECT_TYPE \0 ATTR_1 \0 ATTR_2 \0 ...`
//!
//! The leading namespace character keeps composite keys out of simple range
//! scans, and the trailing delimiter after every attribute means a prefix
//! scan on `[address]` never matches a longer address sharing the same prefix.

use crate::error::{CoreError, CoreResult};

/// First character of every composite key, also the attribute delimiter
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0}';

const MAX_UNICODE_RUNE: char = char::MAX;

/// Key of a transaction's primary record
pub fn transaction_key(transaction_id: &str) -> String {
    format!("tx_{}", transaction_id)
}

/// Key of a compliance record.
///
/// The timestamp has second resolution, so two events for the same user and
/// action within one second map to the same key.
pub fn compliance_key(user_id: &str, action: &str, timestamp: &str) -> String {
    format!("{}_{}_{}", user_id, action, timestamp)
}

/// Check a caller-supplied simple key
///
/// Empty keys and keys starting with [`COMPOSITE_KEY_NAMESPACE`] are
/// rejected; the latter would land inside the composite keyspace and be
/// read back as an index entry.
pub fn validate_simple_key(key: &str) -> CoreResult<()> {
    if key.is_empty() || key.starts_with(COMPOSITE_KEY_NAMESPACE) {
        return Err(CoreError::InvalidSimpleKey(key.to_string()));
    }
    Ok(())
}

/// A structured key: object type plus ordered attributes
///
/// # Example
/// ```
/// use kycledger_core::CompositeKey;
///
/// let key = CompositeKey::new("from~tx", ["ADDR-A", "TX-1"]).unwrap();
/// let encoded = key.encode();
/// assert_eq!(encoded, "\u{0}from~tx\u{0}ADDR-A\u{0}TX-1\u{0}");
/// assert_eq!(CompositeKey::split(&encoded).unwrap(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub object_type: String,
    pub attributes: Vec<String>,
}

impl CompositeKey {
    /// Build a composite key, validating every component
    pub fn new<I, A>(object_type: impl Into<String>, attributes: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let object_type = object_type.into();
        validate_component(&object_type)?;

        let attributes = attributes
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        for attribute in &attributes {
            validate_component(attribute)?;
        }

        Ok(Self {
            object_type,
            attributes,
        })
    }

    /// Encode into the stored key form
    pub fn encode(&self) -> String {
        let mut key = String::new();
        key.push(COMPOSITE_KEY_NAMESPACE);
        key.push_str(&self.object_type);
        key.push(COMPOSITE_KEY_NAMESPACE);
        for attribute in &self.attributes {
            key.push_str(attribute);
            key.push(COMPOSITE_KEY_NAMESPACE);
        }
        key
    }

    /// Encoded prefix matching every key of `object_type` whose leading
    /// attributes equal `attributes`
    pub fn partial_prefix(object_type: &str, attributes: &[&str]) -> CoreResult<String> {
        Ok(Self::new(object_type, attributes.iter().copied())?.encode())
    }

    /// Parse an encoded composite key
    pub fn split(key: &str) -> CoreResult<Self> {
        let rest = key
            .strip_prefix(COMPOSITE_KEY_NAMESPACE)
            .ok_or_else(|| CoreError::InvalidCompositeKey(format!("missing namespace: {:?}", key)))?;
        let rest = rest
            .strip_suffix(COMPOSITE_KEY_NAMESPACE)
            .ok_or_else(|| CoreError::InvalidCompositeKey(format!("missing terminator: {:?}", key)))?;

        let mut parts = rest.split(COMPOSITE_KEY_NAMESPACE);
        let object_type = parts.next().unwrap_or_default().to_string();
        let attributes = parts.map(str::to_string).collect();

        Ok(Self {
            object_type,
            attributes,
        })
    }

    /// Check whether a stored key is composite
    pub fn is_composite(key: &str) -> bool {
        key.starts_with(COMPOSITE_KEY_NAMESPACE)
    }
}

fn validate_component(component: &str) -> CoreResult<()> {
    if component.contains(COMPOSITE_KEY_NAMESPACE) || component.contains(MAX_UNICODE_RUNE) {
        return Err(CoreError::InvalidCompositeKey(format!(
            "component {:?} contains a reserved character",
            component
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_keys() {
        assert_eq!(transaction_key("TX-001"), "tx_TX-001");
        assert_eq!(
            compliance_key("USER-1", "KYC Status Update", "2024-05-01T00:00:00Z"),
            "USER-1_KYC Status Update_2024-05-01T00:00:00Z"
        );
    }

    #[test]
    fn test_split_roundtrip() {
        let key = CompositeKey::new("to~tx", ["ADDR-B", "TX-9"]).unwrap();
        let parsed = CompositeKey::split(&key.encode()).unwrap();
        assert_eq!(parsed.object_type, "to~tx");
        assert_eq!(parsed.attributes, vec!["ADDR-B", "TX-9"]);
    }

    #[test]
    fn test_partial_prefix_does_not_match_longer_address() {
        let prefix = CompositeKey::partial_prefix("from~tx", &["ADDR"]).unwrap();
        let own = CompositeKey::new("from~tx", ["ADDR", "TX-1"]).unwrap().encode();
        let other = CompositeKey::new("from~tx", ["ADDR2", "TX-1"]).unwrap().encode();

        assert!(own.starts_with(&prefix));
        assert!(!other.starts_with(&prefix));
    }

    #[test]
    fn test_reserved_characters_rejected() {
        let result = CompositeKey::new("from~tx", ["bad\u{0}addr"]);
        assert!(matches!(result, Err(CoreError::InvalidCompositeKey(_))));

        let result = CompositeKey::new("from~tx", [String::from(char::MAX)]);
        assert!(matches!(result, Err(CoreError::InvalidCompositeKey(_))));
    }

    #[test]
    fn test_validate_simple_key() {
        assert!(validate_simple_key("AddrAlice").is_ok());
        assert!(validate_simple_key("tx_TX-001").is_ok());

        let forged = CompositeKey::new("from~tx", ["AddrVictim", "TX-1"]).unwrap().encode();
        assert!(matches!(
            validate_simple_key(&forged),
            Err(CoreError::InvalidSimpleKey(_))
        ));
        assert!(validate_simple_key("").is_err());
    }

    #[test]
    fn test_split_rejects_simple_key() {
        assert!(CompositeKey::split("tx_TX-001").is_err());
        assert!(!CompositeKey::is_composite("tx_TX-001"));
    }
}
