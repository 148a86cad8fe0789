//! KYC Ledger State - access to the host ledger's key-value state
//!
//! Every component talks to the ledger through [`LedgerState`]: an ordered
//! public keyspace plus named private collections. [`MemoryState`] is the
//! in-process implementation used by tests and local tooling.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::{Cursor, MemoryState};
pub use traits::{KeyValue, LedgerState, StateIterator};
