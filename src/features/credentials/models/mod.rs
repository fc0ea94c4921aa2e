mod credential;

pub use credential::{UserCredentialHash, VerificationResult};
