//! Lookup and update outcomes
//!
//! Private enrichment is best-effort. Instead of hiding which path was taken,
//! reads and updates report it.

use kycledger_core::KycRecord;

/// Result of a KYC status lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KycLookup {
    /// Full record read from the private collection
    Enriched(KycRecord),
    /// Rebuilt from the public projection: `full_name` and
    /// `verification_date` are empty
    PublicOnly(KycRecord),
}

impl KycLookup {
    /// The record, whichever path produced it
    pub fn record(&self) -> &KycRecord {
        match self {
            KycLookup::Enriched(record) | KycLookup::PublicOnly(record) => record,
        }
    }

    /// Consume into the record
    pub fn into_record(self) -> KycRecord {
        match self {
            KycLookup::Enriched(record) | KycLookup::PublicOnly(record) => record,
        }
    }

    /// Check if the private record was read
    pub fn is_enriched(&self) -> bool {
        matches!(self, KycLookup::Enriched(_))
    }
}

/// Which copies a status update reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycUpdate {
    /// Public projection and private record both updated
    PublicAndPrivate,
    /// Only the public projection was updated; the private record was
    /// missing, unreadable or could not be written
    PublicOnly,
}
