//! Compliance audit record

use serde::{Deserialize, Serialize};

use crate::record::JsonRecord;

/// One immutable entry of the compliance audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    pub user_id: String,
    pub action: String,
    pub description: String,
    /// RFC 3339, second resolution
    pub timestamp: String,
}

impl JsonRecord for ComplianceRecord {
    const ENTITY: &'static str = "compliance";
}
