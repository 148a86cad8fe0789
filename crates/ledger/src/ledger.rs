//! Transaction Ledger - primary records plus sender/recipient indexes

use std::collections::HashSet;

use kycledger_core::{transaction_key, JsonRecord, TransactionRecord, TransactionStatus};
use kycledger_state::LedgerState;
use strum::IntoEnumIterator;

use crate::error::{LedgerError, LedgerResult};
use crate::index::IndexDirection;

/// Transaction records over public state
pub struct TransactionLedger<'a, S: LedgerState + ?Sized> {
    state: &'a S,
}

impl<'a, S: LedgerState + ?Sized> TransactionLedger<'a, S> {
    pub fn new(state: &'a S) -> Self {
        Self { state }
    }

    /// Record a completed transaction
    ///
    /// Three writes in order: the primary record, the `from~tx` index entry,
    /// the `to~tx` index entry. There is no rollback: when a later write
    /// fails the earlier ones stay applied and the error is returned. Every
    /// key derives from the caller's `transaction_id`, so retrying the same
    /// request rewrites the same keys and converges.
    pub fn record_transaction(&self, mut record: TransactionRecord) -> LedgerResult<TransactionRecord> {
        if record.transaction_id.is_empty() {
            return Err(LedgerError::EmptyTransactionId);
        }
        if record.from_address.is_empty() {
            return Err(LedgerError::EmptyAddress("fromAddress"));
        }
        if record.to_address.is_empty() {
            return Err(LedgerError::EmptyAddress("toAddress"));
        }
        record.status = TransactionStatus::Completed;

        // Build every key up front so a bad address fails before any write
        let primary_key = transaction_key(&record.transaction_id);
        let from_key = IndexDirection::From.key(&record.from_address, &record.transaction_id)?;
        let to_key = IndexDirection::To.key(&record.to_address, &record.transaction_id)?;
        let id_bytes = record.transaction_id.as_bytes();

        self.state.put_state(&primary_key, record.to_json()?)?;
        self.state.put_state(&from_key, id_bytes.to_vec())?;
        self.state.put_state(&to_key, id_bytes.to_vec())?;

        tracing::info!(
            transaction_id = %record.transaction_id,
            from = %record.from_address,
            to = %record.to_address,
            amount = %record.amount,
            "Transaction recorded"
        );
        Ok(record)
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, transaction_id: &str) -> LedgerResult<TransactionRecord> {
        self.find_transaction(transaction_id)?
            .ok_or_else(|| LedgerError::TransactionNotFound(transaction_id.to_string()))
    }

    /// Get a transaction by ID, `None` when absent
    pub fn find_transaction(&self, transaction_id: &str) -> LedgerResult<Option<TransactionRecord>> {
        match self.state.get_state(&transaction_key(transaction_id))? {
            Some(bytes) => Ok(Some(TransactionRecord::from_json(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All transactions sent or received by `address`
    ///
    /// Sent transactions come first, then received ones, each group in
    /// transaction ID order. A transaction appears once even when the address
    /// is on both sides. Index entries whose primary record is missing are
    /// dropped.
    pub fn get_transactions_by_address(&self, address: &str) -> LedgerResult<Vec<TransactionRecord>> {
        let mut seen = HashSet::new();
        let mut transactions = Vec::new();

        for direction in IndexDirection::iter() {
            let entries = self
                .state
                .get_state_by_partial_composite_key(direction.object_type(), &[address])?;

            for entry in entries {
                let entry = entry?;
                let transaction_id = IndexDirection::transaction_id(&entry.key)?;
                if !seen.insert(transaction_id.clone()) {
                    continue;
                }

                match self.find_transaction(&transaction_id)? {
                    Some(record) => transactions.push(record),
                    None => tracing::debug!(
                        transaction_id = %transaction_id,
                        index = %direction,
                        "Index entry without primary record, skipping"
                    ),
                }
            }
        }

        Ok(transactions)
    }
}
