//! Compliance Log - append-only writer over a private collection

use std::sync::Arc;

use kycledger_core::{compliance_key, format_timestamp, Clock, ComplianceRecord, JsonRecord};
use kycledger_state::LedgerState;

use crate::error::ComplianceResult;

/// Append-only compliance audit sink
///
/// Each call to [`record`](Self::record) writes one [`ComplianceRecord`]
/// keyed by `userId_action_timestamp`.
pub struct ComplianceLog<'a, S: LedgerState + ?Sized> {
    state: &'a S,
    collection: String,
    clock: Arc<dyn Clock>,
}

impl<'a, S: LedgerState + ?Sized> ComplianceLog<'a, S> {
    /// Create a log writing into `collection`
    pub fn new(state: &'a S, collection: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            collection: collection.into(),
            clock,
        }
    }

    /// Append a compliance event stamped with the current time
    ///
    /// Returns the record as written.
    pub fn record(
        &self,
        user_id: &str,
        action: &str,
        description: &str,
    ) -> ComplianceResult<ComplianceRecord> {
        let timestamp = format_timestamp(self.clock.now());
        let record = ComplianceRecord {
            user_id: user_id.to_string(),
            action: action.to_string(),
            description: description.to_string(),
            timestamp,
        };

        let key = compliance_key(&record.user_id, &record.action, &record.timestamp);
        self.state
            .put_private_data(&self.collection, &key, record.to_json()?)?;

        tracing::debug!(
            user_id = %record.user_id,
            action = %record.action,
            timestamp = %record.timestamp,
            "Compliance event recorded"
        );

        Ok(record)
    }

    /// Read back the entry for a user, action and timestamp
    pub fn get(
        &self,
        user_id: &str,
        action: &str,
        timestamp: &str,
    ) -> ComplianceResult<Option<ComplianceRecord>> {
        let key = compliance_key(user_id, action, timestamp);
        match self.state.get_private_data(&self.collection, &key)? {
            Some(bytes) => Ok(Some(ComplianceRecord::from_json(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::KYC_STATUS_UPDATE;
    use crate::error::ComplianceError;
    use chrono::{Duration, TimeZone, Utc};
    use kycledger_core::FixedClock;
    use kycledger_state::MemoryState;

    const COLLECTION: &str = "complianceRecords";

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_record_writes_keyed_entry() {
        let state = MemoryState::new();
        let log = ComplianceLog::new(&state, COLLECTION, clock());

        let record = log.record("USER-001", KYC_STATUS_UPDATE, "Documents verified").unwrap();

        assert_eq!(record.timestamp, "2024-05-01T09:00:00Z");
        assert_eq!(
            state.private_keys(COLLECTION),
            vec!["USER-001_KYC Status Update_2024-05-01T09:00:00Z"]
        );

        let stored = log
            .get("USER-001", KYC_STATUS_UPDATE, "2024-05-01T09:00:00Z")
            .unwrap()
            .unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn test_distinct_ticks_keep_both_entries() {
        let state = MemoryState::new();
        let clock = clock();
        let log = ComplianceLog::new(&state, COLLECTION, clock.clone());

        log.record("USER-001", KYC_STATUS_UPDATE, "first").unwrap();
        clock.advance(Duration::seconds(1));
        log.record("USER-001", KYC_STATUS_UPDATE, "second").unwrap();

        assert_eq!(state.private_keys(COLLECTION).len(), 2);
    }

    // Known lossy behaviour: same user, same action, same second.
    #[test]
    fn test_same_tick_collision_overwrites_previous_entry() {
        let state = MemoryState::new();
        let clock = clock();
        let log = ComplianceLog::new(&state, COLLECTION, clock.clone());

        log.record("USER-001", KYC_STATUS_UPDATE, "first").unwrap();
        clock.advance(Duration::milliseconds(400));
        log.record("USER-001", KYC_STATUS_UPDATE, "second").unwrap();

        let keys = state.private_keys(COLLECTION);
        assert_eq!(keys.len(), 1);

        let survivor = log
            .get("USER-001", KYC_STATUS_UPDATE, "2024-05-01T09:00:00Z")
            .unwrap()
            .unwrap();
        assert_eq!(survivor.description, "second");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let state = MemoryState::new();
        state.fail_collection_writes(COLLECTION);
        let log = ComplianceLog::new(&state, COLLECTION, clock());

        let result = log.record("USER-001", KYC_STATUS_UPDATE, "x");
        assert!(matches!(result, Err(ComplianceError::LedgerWriteError(_))));
    }
}
