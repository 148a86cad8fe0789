//! Contract configuration
//!
//! Private collection names must match the collection definitions deployed
//! with the contract. Missing fields fall back to the defaults.
//! Risk thresholds are policy, not configuration, and do not appear here.

use kycledger_core::collections::{COMPLIANCE_COLLECTION, KYC_PRIVATE_COLLECTION};
use kycledger_core::Collections;
use serde::{Deserialize, Serialize};

/// Configuration for [`KycContract`](crate::KycContract)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Private collection holding full KYC records
    #[serde(default = "default_kyc_collection")]
    pub kyc_collection: String,

    /// Private collection holding compliance records
    #[serde(default = "default_compliance_collection")]
    pub compliance_collection: String,
}

fn default_kyc_collection() -> String {
    KYC_PRIVATE_COLLECTION.to_string()
}

fn default_compliance_collection() -> String {
    COMPLIANCE_COLLECTION.to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            kyc_collection: default_kyc_collection(),
            compliance_collection: default_compliance_collection(),
        }
    }
}

impl ContractConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Collection names for the components
    pub fn collections(&self) -> Collections {
        Collections {
            kyc_private: self.kyc_collection.clone(),
            compliance: self.compliance_collection.clone(),
        }
    }
}
