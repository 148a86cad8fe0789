//! JSON encoding shared by every stored record

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A record stored as a UTF-8 JSON object under a single key.
///
/// Decoding is typed: a missing or mistyped required field is reported as
/// [`CoreError::MalformedRecord`] naming the entity.
pub trait JsonRecord: Serialize + DeserializeOwned {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Encode the record as JSON bytes
    fn to_json(&self) -> CoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode the record from JSON bytes
    fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        serde_json::from_slice(bytes).map_err(|source| CoreError::MalformedRecord {
            entity: Self::ENTITY,
            source,
        })
    }
}
