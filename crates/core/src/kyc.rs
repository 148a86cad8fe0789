//! KYC records and their public projection
//!
//! The full [`KycRecord`] lives in the private collection keyed by user ID.
//! A reduced [`PublicKycRecord`] is mirrored to public state keyed by the
//! user's external (Solana) address so anyone can check verification status.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::JsonRecord;

/// Full identity record
///
/// `full_name` and `verification_date` are empty when the record was
/// rebuilt from the public projection only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    pub user_id: String,
    /// External wallet address
    #[serde(rename = "solanaAddress")]
    pub address: String,
    #[serde(default)]
    pub full_name: String,
    pub kyc_verified: bool,
    #[serde(default)]
    pub verification_date: String,
    pub risk_score: i64,
    pub country_code: String,
}

impl KycRecord {
    /// Create a new record
    pub fn new(
        user_id: impl Into<String>,
        address: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            address: address.into(),
            full_name: full_name.into(),
            kyc_verified: false,
            verification_date: String::new(),
            risk_score: 0,
            country_code: String::new(),
        }
    }

    /// Set verification status and date
    pub fn with_verification(mut self, verified: bool, date: impl Into<String>) -> Self {
        self.kyc_verified = verified;
        self.verification_date = date.into();
        self
    }

    /// Set risk score
    pub fn with_risk_score(mut self, risk_score: i64) -> Self {
        self.risk_score = risk_score;
        self
    }

    /// Set country code
    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// The public projection of this record
    pub fn public_projection(&self) -> PublicKycRecord {
        PublicKycRecord {
            user_id: self.user_id.clone(),
            address: self.address.clone(),
            kyc_verified: self.kyc_verified,
            risk_score: self.risk_score,
            country_code: self.country_code.clone(),
            extra: Map::new(),
        }
    }
}

impl JsonRecord for KycRecord {
    const ENTITY: &'static str = "KYC";
}

/// Publicly readable subset of a KYC record
///
/// Fields written by other writers are kept in `extra` so an update
/// rewrites the projection without dropping them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKycRecord {
    pub user_id: String,
    #[serde(rename = "solanaAddress")]
    pub address: String,
    pub kyc_verified: bool,
    pub risk_score: i64,
    pub country_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PublicKycRecord {
    /// Rebuild a record from public fields only
    pub fn into_record(self) -> KycRecord {
        KycRecord {
            user_id: self.user_id,
            address: self.address,
            full_name: String::new(),
            kyc_verified: self.kyc_verified,
            verification_date: String::new(),
            risk_score: self.risk_score,
            country_code: self.country_code,
        }
    }
}

impl JsonRecord for PublicKycRecord {
    const ENTITY: &'static str = "public KYC";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn sample() -> KycRecord {
        KycRecord::new("USER-001", "SoLAddr111", "Alice Nguyen")
            .with_verification(true, "2024-05-01T00:00:00Z")
            .with_risk_score(25)
            .with_country("VN")
    }

    #[test]
    fn test_wire_field_names() {
        let json: Value = serde_json::from_slice(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["userId"], "USER-001");
        assert_eq!(json["solanaAddress"], "SoLAddr111");
        assert_eq!(json["fullName"], "Alice Nguyen");
        assert_eq!(json["kycVerified"], true);
        assert_eq!(json["verificationDate"], "2024-05-01T00:00:00Z");
        assert_eq!(json["riskScore"], 25);
        assert_eq!(json["countryCode"], "VN");
    }

    #[test]
    fn test_projection_drops_private_fields() {
        let json: Value =
            serde_json::from_slice(&sample().public_projection().to_json().unwrap()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert!(!object.contains_key("fullName"));
        assert!(!object.contains_key("verificationDate"));
    }

    #[test]
    fn test_public_only_record_has_empty_private_fields() {
        let record = sample().public_projection().into_record();
        assert_eq!(record.full_name, "");
        assert_eq!(record.verification_date, "");
        assert_eq!(record.risk_score, 25);
    }

    #[test]
    fn test_projection_keeps_unknown_fields() {
        let raw = br#"{"userId":"U","solanaAddress":"A","kycVerified":false,
            "riskScore":10,"countryCode":"SG","tier":"gold"}"#;
        let mut public = PublicKycRecord::from_json(raw).unwrap();
        public.kyc_verified = true;

        let json: Value = serde_json::from_slice(&public.to_json().unwrap()).unwrap();
        assert_eq!(json["tier"], "gold");
        assert_eq!(json["kycVerified"], true);
    }

    #[test]
    fn test_missing_user_id_is_typed_error() {
        let raw = br#"{"solanaAddress":"A","kycVerified":true,"riskScore":1,"countryCode":"SG"}"#;
        let result = PublicKycRecord::from_json(raw);
        assert!(matches!(
            result,
            Err(CoreError::MalformedRecord { entity: "public KYC", .. })
        ));
    }

    #[test]
    fn test_mistyped_risk_score_is_typed_error() {
        let raw = br#"{"userId":"U","solanaAddress":"A","kycVerified":true,
            "riskScore":"high","countryCode":"SG"}"#;
        assert!(PublicKycRecord::from_json(raw).is_err());
    }
}
