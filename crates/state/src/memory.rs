//! In-memory ledger state
//!
//! Ordered maps behind `RwLock`s, plus switches that reproduce host
//! behaviour the components must tolerate:
//! - a private collection this peer is not a member of (reads fail)
//! - writes rejected by key prefix or by collection
//! - reads failing by key prefix, including entries met during a scan
//!
//! Scans take a snapshot when opened, like the host's iterators. Every open
//! [`Cursor`] is counted until dropped.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use kycledger_core::{validate_simple_key, CompositeKey, CoreError};

use crate::error::{StateError, StateResult};
use crate::traits::{KeyValue, LedgerState, StateIterator};

/// Snapshot iterator returned by [`MemoryState`] scans
pub struct Cursor {
    entries: std::vec::IntoIter<StateResult<KeyValue>>,
    open: Arc<AtomicUsize>,
}

impl Cursor {
    fn open(entries: Vec<StateResult<KeyValue>>, open: Arc<AtomicUsize>) -> Self {
        open.fetch_add(1, Ordering::SeqCst);
        Self {
            entries: entries.into_iter(),
            open,
        }
    }
}

impl Iterator for Cursor {
    type Item = StateResult<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// In-memory implementation of [`LedgerState`]
#[derive(Debug, Default)]
pub struct MemoryState {
    public: RwLock<BTreeMap<String, Vec<u8>>>,
    private: RwLock<HashMap<String, BTreeMap<String, Vec<u8>>>>,
    hidden_collections: RwLock<HashSet<String>>,
    failing_collections: RwLock<HashSet<String>>,
    failing_write_prefixes: RwLock<Vec<String>>,
    failing_read_prefixes: RwLock<Vec<String>>,
    open_cursors: Arc<AtomicUsize>,
}

impl MemoryState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    // === Fault injection ===

    /// Make a private collection unreadable, as for a peer outside its policy
    pub fn hide_collection(&self, collection: &str) {
        let mut hidden = self.hidden_collections.write().unwrap();
        hidden.insert(collection.to_string());
    }

    /// Make a hidden collection readable again
    pub fn reveal_collection(&self, collection: &str) {
        let mut hidden = self.hidden_collections.write().unwrap();
        hidden.remove(collection);
    }

    /// Reject every write into a private collection
    pub fn fail_collection_writes(&self, collection: &str) {
        let mut failing = self.failing_collections.write().unwrap();
        failing.insert(collection.to_string());
    }

    /// Reject public writes to keys starting with `prefix`
    pub fn fail_writes_with_prefix(&self, prefix: impl Into<String>) {
        let mut failing = self.failing_write_prefixes.write().unwrap();
        failing.push(prefix.into());
    }

    /// Fail public reads of keys starting with `prefix`
    pub fn fail_reads_with_prefix(&self, prefix: impl Into<String>) {
        let mut failing = self.failing_read_prefixes.write().unwrap();
        failing.push(prefix.into());
    }

    /// Remove every injected fault
    pub fn clear_faults(&self) {
        self.hidden_collections.write().unwrap().clear();
        self.failing_collections.write().unwrap().clear();
        self.failing_write_prefixes.write().unwrap().clear();
        self.failing_read_prefixes.write().unwrap().clear();
    }

    // === Inspection ===

    /// Number of scan cursors not yet dropped
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// All public keys, composite ones included, in key order
    pub fn public_keys(&self) -> Vec<String> {
        self.public.read().unwrap().keys().cloned().collect()
    }

    /// Read private data ignoring visibility
    pub fn private_value(&self, collection: &str, key: &str) -> Option<Vec<u8>> {
        let private = self.private.read().unwrap();
        private.get(collection).and_then(|c| c.get(key)).cloned()
    }

    /// All keys of a private collection in key order, ignoring visibility
    pub fn private_keys(&self, collection: &str) -> Vec<String> {
        let private = self.private.read().unwrap();
        private
            .get(collection)
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Delete a public key outside of any component
    pub fn delete_state(&self, key: &str) -> Option<Vec<u8>> {
        self.public.write().unwrap().remove(key)
    }

    // === Internals ===

    /// Keys in the composite namespace must decode as composite keys with
    /// an object type; anything else must be a valid simple key.
    fn check_key(key: &str) -> StateResult<()> {
        if !CompositeKey::is_composite(key) {
            return Ok(validate_simple_key(key)?);
        }
        let parsed = CompositeKey::split(key)?;
        if parsed.object_type.is_empty() {
            return Err(CoreError::InvalidCompositeKey(format!("no object type: {:?}", key)).into());
        }
        Ok(())
    }

    fn check_read(&self, key: &str) -> StateResult<()> {
        let failing = self.failing_read_prefixes.read().unwrap();
        if failing.iter().any(|prefix| key.starts_with(prefix.as_str())) {
            return Err(StateError::ReadFailed {
                key: key.to_string(),
                reason: "injected read failure".to_string(),
            });
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> StateResult<()> {
        let failing = self.failing_write_prefixes.read().unwrap();
        if failing.iter().any(|prefix| key.starts_with(prefix.as_str())) {
            tracing::debug!(key = %key.escape_debug(), "Rejecting write (injected)");
            return Err(StateError::WriteFailed {
                key: key.to_string(),
                reason: "injected write failure".to_string(),
            });
        }
        Ok(())
    }

    fn entry(&self, key: &str, value: &[u8]) -> StateResult<KeyValue> {
        self.check_read(key)?;
        Ok(KeyValue {
            key: key.to_string(),
            value: value.to_vec(),
        })
    }

    fn cursor(&self, entries: Vec<StateResult<KeyValue>>) -> StateIterator<'_> {
        Box::new(Cursor::open(entries, Arc::clone(&self.open_cursors)))
    }
}

impl LedgerState for MemoryState {
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        Self::check_key(key)?;
        self.check_read(key)?;
        Ok(self.public.read().unwrap().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> StateResult<()> {
        Self::check_key(key)?;
        self.check_write(key)?;
        self.public.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn get_private_data(&self, collection: &str, key: &str) -> StateResult<Option<Vec<u8>>> {
        if self.hidden_collections.read().unwrap().contains(collection) {
            return Err(StateError::CollectionAccessDenied(collection.to_string()));
        }
        Ok(self.private_value(collection, key))
    }

    fn put_private_data(&self, collection: &str, key: &str, value: Vec<u8>) -> StateResult<()> {
        if self.failing_collections.read().unwrap().contains(collection) {
            return Err(StateError::WriteFailed {
                key: format!("{}/{}", collection, key),
                reason: "injected write failure".to_string(),
            });
        }
        let mut private = self.private.write().unwrap();
        private
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> StateResult<StateIterator<'_>> {
        if !start_key.is_empty() && !end_key.is_empty() && start_key > end_key {
            return Ok(self.cursor(Vec::new()));
        }

        let lower = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key.to_string())
        };
        let upper = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key.to_string())
        };

        let public = self.public.read().unwrap();
        let entries = public
            .range::<String, _>((lower, upper))
            .filter(|(key, _)| !CompositeKey::is_composite(key))
            .map(|(key, value)| self.entry(key, value))
            .collect();

        Ok(self.cursor(entries))
    }

    fn get_state_by_partial_composite_key(
        &self,
        object_type: &str,
        attributes: &[&str],
    ) -> StateResult<StateIterator<'_>> {
        let prefix = CompositeKey::partial_prefix(object_type, attributes)?;

        let public = self.public.read().unwrap();
        let entries = public
            .range::<String, _>((Bound::Included(prefix.clone()), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix.as_str()))
            .map(|(key, value)| self.entry(key, value))
            .collect();

        Ok(self.cursor(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(state: &MemoryState, key: &str, value: &str) {
        state.put_state(key, value.as_bytes().to_vec()).unwrap();
    }

    fn keys(iter: StateIterator<'_>) -> Vec<String> {
        iter.map(|kv| kv.unwrap().key).collect()
    }

    #[test]
    fn test_get_put_public() {
        let state = MemoryState::new();
        assert_eq!(state.get_state("A").unwrap(), None);

        put(&state, "A", "1");
        assert_eq!(state.get_state("A").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_full_range_skips_composite_keys() {
        let state = MemoryState::new();
        put(&state, "B", "2");
        put(&state, "A", "1");
        let composite = CompositeKey::new("from~tx", ["A", "TX-1"]).unwrap().encode();
        put(&state, &composite, "TX-1");

        assert_eq!(keys(state.get_state_by_range("", "").unwrap()), vec!["A", "B"]);
    }

    #[test]
    fn test_range_bounds_inclusive_exclusive() {
        let state = MemoryState::new();
        for key in ["a", "b", "c", "d"] {
            put(&state, key, key);
        }

        assert_eq!(keys(state.get_state_by_range("b", "d").unwrap()), vec!["b", "c"]);
        assert_eq!(keys(state.get_state_by_range("c", "").unwrap()), vec!["c", "d"]);
        assert!(keys(state.get_state_by_range("d", "a").unwrap()).is_empty());
    }

    #[test]
    fn test_partial_composite_scan() {
        let state = MemoryState::new();
        for (addr, id) in [("A", "TX-2"), ("A", "TX-1"), ("AB", "TX-3"), ("B", "TX-4")] {
            let key = CompositeKey::new("from~tx", [addr, id]).unwrap().encode();
            put(&state, &key, id);
        }

        let found: Vec<Vec<String>> = state
            .get_state_by_partial_composite_key("from~tx", &["A"])
            .unwrap()
            .map(|kv| CompositeKey::split(&kv.unwrap().key).unwrap().attributes)
            .collect();

        assert_eq!(found, vec![vec!["A", "TX-1"], vec!["A", "TX-2"]]);
    }

    #[test]
    fn test_malformed_keys_rejected() {
        let state = MemoryState::new();

        for key in ["", "\u{0}AddrEvil", "\u{0}\u{0}"] {
            assert!(matches!(
                state.put_state(key, b"{}".to_vec()),
                Err(StateError::InvalidKey(_))
            ));
            assert!(matches!(state.get_state(key), Err(StateError::InvalidKey(_))));
        }
        assert!(state.public_keys().is_empty());

        let index = CompositeKey::new("to~tx", ["AddrB", "TX-1"]).unwrap().encode();
        assert!(state.put_state(&index, b"TX-1".to_vec()).is_ok());
        assert_eq!(state.get_state(&index).unwrap(), Some(b"TX-1".to_vec()));
    }

    #[test]
    fn test_hidden_collection() {
        let state = MemoryState::new();
        state.put_private_data("kycPrivateData", "U1", b"{}".to_vec()).unwrap();
        state.hide_collection("kycPrivateData");

        assert!(matches!(
            state.get_private_data("kycPrivateData", "U1"),
            Err(StateError::CollectionAccessDenied(_))
        ));
        assert!(state.private_value("kycPrivateData", "U1").is_some());

        state.reveal_collection("kycPrivateData");
        assert!(state.get_private_data("kycPrivateData", "U1").unwrap().is_some());
    }

    #[test]
    fn test_injected_write_failures() {
        let state = MemoryState::new();
        state.fail_writes_with_prefix("tx_");
        state.fail_collection_writes("complianceRecords");

        assert!(state.put_state("tx_1", Vec::new()).is_err());
        assert!(state.put_state("other", Vec::new()).is_ok());
        assert!(state
            .put_private_data("complianceRecords", "k", Vec::new())
            .is_err());

        state.clear_faults();
        assert!(state.put_state("tx_1", Vec::new()).is_ok());
    }

    #[test]
    fn test_cursor_released_on_drop() {
        let state = MemoryState::new();
        put(&state, "A", "1");
        put(&state, "B", "2");

        {
            let mut iter = state.get_state_by_range("", "").unwrap();
            assert_eq!(state.open_cursors(), 1);
            iter.next();
        }
        assert_eq!(state.open_cursors(), 0);
    }

    #[test]
    fn test_read_failure_surfaces_in_scan() {
        let state = MemoryState::new();
        put(&state, "A", "1");
        put(&state, "B", "2");
        state.fail_reads_with_prefix("B");

        let results: Vec<_> = state.get_state_by_range("", "").unwrap().collect();
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(StateError::ReadFailed { .. })));
    }
}
