//! KYC Ledger Identity Store
//!
//! Owns the KYC record lifecycle and its public/private split:
//!
//! ```text
//! store_kyc ──► kycPrivateData/<userId>   (full record, authoritative)
//!          └──► public/<solanaAddress>    (projection: userId, kycVerified,
//!                                          riskScore, countryCode)
//! ```
//!
//! Reads start from the public projection and enrich from the private
//! collection when this peer can see it; see [`KycLookup`].

pub mod error;
pub mod lookup;
pub mod query;
pub mod store;

pub use error::{IdentityError, IdentityResult};
pub use lookup::{KycLookup, KycUpdate};
pub use query::CountryQuery;
pub use store::IdentityStore;
