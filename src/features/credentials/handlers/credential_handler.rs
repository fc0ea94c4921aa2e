use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::credentials::dtos::CredentialVerificationDto;
use crate::features::credentials::services::CredentialVerifier;
use crate::shared::types::ApiResponse;

/// Verify a user's stored credential hash against the on-chain registry
#[utoipa::path(
    post,
    path = "/api/credentials/{user_id}/verify",
    params(
        ("user_id" = String, Path, description = "User whose stored hash is checked")
    ),
    responses(
        (status = 200, description = "Registry answered (verified or invalid)", body = ApiResponse<CredentialVerificationDto>),
        (status = 404, description = "No credential hash stored for the user"),
        (status = 502, description = "Provider, contract binding or contract call failed")
    ),
    tag = "credentials"
)]
pub async fn verify_credential(
    State(verifier): State<Arc<CredentialVerifier>>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<CredentialVerificationDto>>> {
    let result = verifier.verify(&user_id).await?;
    let message = result.as_str().to_string();

    Ok(Json(ApiResponse::success(
        Some(CredentialVerificationDto::new(user_id, result)),
        Some(message),
        None,
    )))
}
