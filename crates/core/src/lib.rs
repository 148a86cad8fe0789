//! KYC Ledger Core - Domain types
//!
//! This crate contains the types shared by every component of the ledger:
//! - [`KycRecord`] / [`PublicKycRecord`]: full identity record and its public projection
//! - [`ComplianceRecord`]: one entry of the append-only audit trail
//! - [`TransactionRecord`]: a recorded money movement
//! - [`CompositeKey`]: structured keys backing the address indexes
//! - [`Clock`]: source of record timestamps
//!
//! ## State layout
//!
//! ```text
//! Public state                          Private collections
//! ├── <solanaAddress>  PublicKycRecord  ├── kycPrivateData
//! ├── tx_<id>          TransactionRecord│   └── <userId>  KycRecord
//! ├── \0from~tx\0<addr>\0<id>\0         └── complianceRecords
//! └── \0to~tx\0<addr>\0<id>\0               └── <userId>_<action>_<ts>  ComplianceRecord
//! ```

pub mod clock;
pub mod collections;
pub mod compliance;
pub mod error;
pub mod key;
pub mod kyc;
pub mod record;
pub mod transaction;
pub mod validation;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use collections::Collections;
pub use compliance::ComplianceRecord;
pub use error::{CoreError, CoreResult};
pub use key::{
    compliance_key, transaction_key, validate_simple_key, CompositeKey, COMPOSITE_KEY_NAMESPACE,
};
pub use kyc::{KycRecord, PublicKycRecord};
pub use record::JsonRecord;
pub use transaction::{TransactionRecord, TransactionStatus};
pub use validation::{ProposedTransaction, ValidationResult};
