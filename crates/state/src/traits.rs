//! Ledger state interface

use crate::error::StateResult;

/// A single entry returned by a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// Lazy scan over state entries.
///
/// The underlying cursor is released when the iterator is dropped, so early
/// returns and `?` inside a scan loop never leak it.
pub type StateIterator<'a> = Box<dyn Iterator<Item = StateResult<KeyValue>> + 'a>;

/// Key-value state exposed by the host ledger to one request
///
/// Writes take `&self`: the host buffers them in the request's write set.
/// Conflict detection between concurrent requests is the host's job.
pub trait LedgerState {
    /// Read a public key. `Ok(None)` when absent.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write a public key
    fn put_state(&self, key: &str, value: Vec<u8>) -> StateResult<()>;

    /// Read a key from a private collection. `Ok(None)` when absent;
    /// an error when the collection cannot be read from this peer.
    fn get_private_data(&self, collection: &str, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Write a key into a private collection
    fn put_private_data(&self, collection: &str, key: &str, value: Vec<u8>) -> StateResult<()>;

    /// Scan simple public keys in `[start_key, end_key)` in key order.
    ///
    /// An empty bound is open on that side, so `("", "")` scans every
    /// simple key. Composite keys are never returned.
    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> StateResult<StateIterator<'_>>;

    /// Scan composite keys of `object_type` whose leading attributes equal
    /// `attributes`, in key order
    fn get_state_by_partial_composite_key(
        &self,
        object_type: &str,
        attributes: &[&str],
    ) -> StateResult<StateIterator<'_>>;
}
