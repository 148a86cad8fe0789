//! Country query over the public keyspace

use kycledger_core::{JsonRecord, KycRecord, PublicKycRecord};
use kycledger_state::StateIterator;

use crate::error::IdentityResult;

/// Lazy scan yielding public KYC records for one country
///
/// Produced by [`IdentityStore::query_by_country`](crate::IdentityStore::query_by_country).
/// Entries that are not KYC projections (transactions, malformed or
/// mistyped values) are skipped. Records carry public fields only and their
/// `country_code` is the queried value. The scan cursor is released when
/// this iterator is dropped.
pub struct CountryQuery<'a> {
    cursor: StateIterator<'a>,
    country_code: String,
}

impl<'a> CountryQuery<'a> {
    pub(crate) fn new(cursor: StateIterator<'a>, country_code: impl Into<String>) -> Self {
        Self {
            cursor,
            country_code: country_code.into(),
        }
    }
}

impl Iterator for CountryQuery<'_> {
    type Item = IdentityResult<KycRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.cursor.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            let public = match PublicKycRecord::from_json(&entry.value) {
                Ok(public) => public,
                Err(_) => continue,
            };
            if public.country_code != self.country_code {
                continue;
            }

            let mut record = public.into_record();
            record.country_code = self.country_code.clone();
            return Some(Ok(record));
        }
    }
}
