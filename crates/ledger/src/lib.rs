//! KYC Ledger Transaction Ledger
//!
//! Transaction records live in public state under `tx_<transactionId>`.
//! Lookup by participant uses two composite-key indexes:
//!
//! ```text
//! tx_<id>                        TransactionRecord
//! \0from~tx\0<from>\0<id>\0      <id>
//! \0to~tx\0<to>\0<id>\0          <id>
//! ```
//!
//! A prefix scan on `[address]` enumerates every transaction an address sent
//! or received without a native secondary index.

pub mod error;
pub mod index;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use index::IndexDirection;
pub use ledger::TransactionLedger;
