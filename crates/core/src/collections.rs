//! Names of the private data collections

use serde::{Deserialize, Serialize};

/// Default collection holding full KYC records
pub const KYC_PRIVATE_COLLECTION: &str = "kycPrivateData";

/// Default collection holding compliance records
pub const COMPLIANCE_COLLECTION: &str = "complianceRecords";

/// Private collection names used by the components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    /// Full KYC records keyed by user ID
    pub kyc_private: String,
    /// Compliance audit trail
    pub compliance: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            kyc_private: KYC_PRIVATE_COLLECTION.to_string(),
            compliance: COMPLIANCE_COLLECTION.to_string(),
        }
    }
}
