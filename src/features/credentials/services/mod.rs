mod credential_store;
mod credential_verifier;

pub use credential_store::{CredentialStore, PgCredentialStore};
pub use credential_verifier::CredentialVerifier;
