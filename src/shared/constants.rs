/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Highest page number honored
pub const MAX_PAGE: i64 = 1_000_000;

// =============================================================================
// USER-FACING TEXT
// =============================================================================

/// Shown when the credential registry confirms the user's hash
pub const CREDENTIAL_VERIFIED: &str = "Credential Verified";

/// Shown when the credential registry rejects the user's hash
pub const CREDENTIAL_INVALID: &str = "Invalid Credential";

/// Shown under a ticket whenever the suggestion API yields nothing usable
pub const SUGGESTION_FALLBACK: &str = "No suggestions available. Please try again later.";

/// Contract method queried for every verification
pub const VERIFY_CREDENTIAL_FUNCTION: &str = "verifyCredential";
