use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::credentials::models::VerificationResult;

/// Response DTO for a credential verification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredentialVerificationDto {
    pub user_id: String,
    pub verified: bool,
    /// "Credential Verified" or "Invalid Credential"
    pub result: VerificationResult,
}

impl CredentialVerificationDto {
    pub fn new(user_id: String, result: VerificationResult) -> Self {
        Self {
            user_id,
            verified: result.is_verified(),
            result,
        }
    }
}
