use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{CREDENTIAL_INVALID, CREDENTIAL_VERIFIED};

/// Hash recorded for a user at enrollment; passed verbatim to the registry contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentialHash(String);

impl UserCredentialHash {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of a successful registry query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VerificationResult {
    #[serde(rename = "Credential Verified")]
    Verified,
    #[serde(rename = "Invalid Credential")]
    Invalid,
}

impl VerificationResult {
    pub fn from_contract(is_valid: bool) -> Self {
        if is_valid {
            VerificationResult::Verified
        } else {
            VerificationResult::Invalid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationResult::Verified => CREDENTIAL_VERIFIED,
            VerificationResult::Invalid => CREDENTIAL_INVALID,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResult::Verified)
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
