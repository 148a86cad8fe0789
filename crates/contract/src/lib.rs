//! KYC Ledger Contract - request entry point
//!
//! Wires the identity store, compliance log, transaction ledger and
//! validation gate over one [`LedgerState`](kycledger_state::LedgerState).
//! The host calls [`KycContract::invoke`] once per request with a function
//! name and string arguments; typed methods are available for in-process
//! callers.
//!
//! ## Functions
//!
//! | Function | Arguments |
//! |---|---|
//! | `InitLedger` | |
//! | `StoreKYC` | userId, solanaAddress, fullName, kycVerified, verificationDate, riskScore, countryCode |
//! | `GetKYCStatus` | solanaAddress |
//! | `UpdateKYCStatus` | userId, solanaAddress, kycVerified, reason |
//! | `RecordComplianceEvent` | userId, action, description |
//! | `ValidateTransaction` | solanaAddress, transactionJson |
//! | `QueryKYCByCountry` | countryCode |
//! | `RecordTransaction` | transactionId, fromAddress, toAddress, amount, sourceCurrency, destinationCurrency, memo, timestamp |
//! | `GetTransaction` | transactionId |
//! | `GetTransactionsByAddress` | address |

pub mod args;
pub mod config;
pub mod contract;
pub mod error;
pub mod function;

pub use config::ContractConfig;
pub use contract::KycContract;
pub use error::{ContractError, ContractResult};
pub use function::ContractFunction;
