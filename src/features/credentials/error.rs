use crate::core::error::AppError;
use crate::modules::evm::EvmError;

/// Failure of one verification stage
///
/// Infrastructure failures stay distinct from an `Invalid Credential` answer.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("No credential hash stored for user '{0}'")]
    HashNotFound(String),

    #[error("Credential lookup failed: {0}")]
    Lookup(#[source] sqlx::Error),

    #[error("Stored credential hash for user '{user_id}' is malformed: {source}")]
    MalformedHash {
        user_id: String,
        #[source]
        source: EvmError,
    },

    #[error("Blockchain provider unreachable: {0}")]
    Connection(#[source] EvmError),

    #[error("Credential contract could not be bound: {0}")]
    ContractBinding(#[source] EvmError),

    #[error("Credential contract call failed: {0}")]
    ContractCall(#[source] EvmError),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::HashNotFound(_) => AppError::NotFound(err.to_string()),
            CredentialError::Lookup(e) => AppError::Database(e),
            CredentialError::MalformedHash { .. } => AppError::Internal(err.to_string()),
            CredentialError::Connection(_)
            | CredentialError::ContractBinding(_)
            | CredentialError::ContractCall(_) => AppError::ExternalServiceError(err.to_string()),
        }
    }
}
