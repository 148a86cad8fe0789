//! Identity Store - KYC record lifecycle

use std::sync::Arc;

use kycledger_compliance::{ComplianceLog, KYC_STATUS_UPDATE};
use kycledger_core::{
    format_timestamp, validate_simple_key, Clock, Collections, JsonRecord, KycRecord,
    PublicKycRecord,
};
use kycledger_state::LedgerState;

use crate::error::{IdentityError, IdentityResult};
use crate::lookup::{KycLookup, KycUpdate};
use crate::query::CountryQuery;

/// KYC records over public state and the private KYC collection
///
/// Records are created by [`store_kyc`](Self::store_kyc), mutated only by
/// [`update_kyc_status`](Self::update_kyc_status) and never deleted.
pub struct IdentityStore<'a, S: LedgerState + ?Sized> {
    state: &'a S,
    collection: String,
    clock: Arc<dyn Clock>,
    log: ComplianceLog<'a, S>,
}

impl<'a, S: LedgerState + ?Sized> IdentityStore<'a, S> {
    /// Create a store over `state`
    pub fn new(state: &'a S, collections: &Collections, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            collection: collections.kyc_private.clone(),
            log: ComplianceLog::new(state, collections.compliance.clone(), Arc::clone(&clock)),
            clock,
        }
    }

    /// Store a KYC record
    ///
    /// Fails with [`IdentityError::InvalidAddress`] before any write when the
    /// address cannot be a simple public key.
    ///
    /// Writes the full record to the private collection under its user ID,
    /// then the public projection under its address. The two writes are not
    /// atomic: if the public write fails the private record stays written and
    /// a retry with the same record converges.
    pub fn store_kyc(&self, record: &KycRecord) -> IdentityResult<()> {
        Self::check_address(&record.address)?;
        self.state
            .put_private_data(&self.collection, &record.user_id, record.to_json()?)?;

        let public = record.public_projection();
        self.state.put_state(&record.address, public.to_json()?)?;

        tracing::info!(
            user_id = %record.user_id,
            address = %record.address,
            verified = record.kyc_verified,
            "KYC record stored"
        );
        Ok(())
    }

    /// Look up KYC status by address
    ///
    /// Fails with [`IdentityError::NotFound`] when no projection exists and
    /// with a record error when the projection does not decode. A private
    /// record that cannot be read (collection not visible, or never stored)
    /// degrades the result to [`KycLookup::PublicOnly`].
    pub fn get_kyc_status(&self, address: &str) -> IdentityResult<KycLookup> {
        let public = self.read_public(address)?;

        match self.state.get_private_data(&self.collection, &public.user_id) {
            Ok(Some(bytes)) => Ok(KycLookup::Enriched(KycRecord::from_json(&bytes)?)),
            Ok(None) => {
                tracing::debug!(address = %address, "No private KYC record, using public projection");
                Ok(KycLookup::PublicOnly(Self::public_only(public, address)))
            }
            Err(err) => {
                tracing::debug!(address = %address, error = %err, "Private KYC record unavailable");
                Ok(KycLookup::PublicOnly(Self::public_only(public, address)))
            }
        }
    }

    /// Update the verification flag
    ///
    /// The public projection must exist and its update must succeed. The
    /// private record update (flag and verification date) is best-effort: any
    /// failure there is logged and reported as [`KycUpdate::PublicOnly`], so
    /// the two copies can diverge. A "KYC Status Update" compliance entry
    /// with `reason` is appended either way.
    pub fn update_kyc_status(
        &self,
        user_id: &str,
        address: &str,
        verified: bool,
        reason: &str,
    ) -> IdentityResult<KycUpdate> {
        let mut public = self.read_public(address)?;
        public.kyc_verified = verified;
        self.state.put_state(address, public.to_json()?)?;

        let outcome = match self.update_private(user_id, verified) {
            Ok(true) => KycUpdate::PublicAndPrivate,
            Ok(false) => KycUpdate::PublicOnly,
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "Private KYC update skipped");
                KycUpdate::PublicOnly
            }
        };

        if let Err(err) = self.log.record(user_id, KYC_STATUS_UPDATE, reason) {
            tracing::warn!(user_id = %user_id, error = %err, "Failed to record KYC status update");
        }

        tracing::info!(
            user_id = %user_id,
            address = %address,
            verified,
            outcome = ?outcome,
            "KYC status updated"
        );
        Ok(outcome)
    }

    /// Query public KYC records by country
    ///
    /// Every call opens a fresh full scan of the public keyspace; the
    /// returned iterator cannot be restarted.
    pub fn query_by_country(&self, country_code: &str) -> IdentityResult<CountryQuery<'a>> {
        let cursor = self.state.get_state_by_range("", "")?;
        Ok(CountryQuery::new(cursor, country_code))
    }

    /// The address is used verbatim as a public key
    fn check_address(address: &str) -> IdentityResult<()> {
        validate_simple_key(address).map_err(|_| IdentityError::InvalidAddress(address.to_string()))
    }

    fn read_public(&self, address: &str) -> IdentityResult<PublicKycRecord> {
        Self::check_address(address)?;
        let bytes = self
            .state
            .get_state(address)?
            .ok_or_else(|| IdentityError::NotFound(address.to_string()))?;
        Ok(PublicKycRecord::from_json(&bytes)?)
    }

    /// Returns `Ok(false)` when there is no private record to update
    fn update_private(&self, user_id: &str, verified: bool) -> IdentityResult<bool> {
        let Some(bytes) = self.state.get_private_data(&self.collection, user_id)? else {
            return Ok(false);
        };

        let mut record = KycRecord::from_json(&bytes)?;
        record.kyc_verified = verified;
        record.verification_date = format_timestamp(self.clock.now());

        self.state
            .put_private_data(&self.collection, user_id, record.to_json()?)?;
        Ok(true)
    }

    fn public_only(public: PublicKycRecord, address: &str) -> KycRecord {
        let mut record = public.into_record();
        record.address = address.to_string();
        record
    }
}
