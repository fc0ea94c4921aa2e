use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::credentials::handlers;
use crate::features::credentials::services::CredentialVerifier;

/// Create routes for credential verification
pub fn routes(verifier: Arc<CredentialVerifier>) -> Router {
    Router::new()
        .route(
            "/api/credentials/{user_id}/verify",
            post(handlers::verify_credential),
        )
        .with_state(verifier)
}
