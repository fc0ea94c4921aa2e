use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::suggestions::dtos::{SuggestDraftDto, SuggestionResponseDto};
use crate::features::suggestions::routes::SuggestionState;
use crate::shared::types::ApiResponse;

/// Suggest a resolution for an existing ticket
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/suggestion",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Suggestion or fallback message", body = ApiResponse<SuggestionResponseDto>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "suggestions"
)]
pub async fn suggest_for_ticket(
    State(state): State<SuggestionState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SuggestionResponseDto>>> {
    let ticket = state.tickets.find(id).await?;
    let outcome = state.handler.handle(&ticket).await;

    Ok(Json(ApiResponse::success(
        Some(SuggestionResponseDto::new(Some(ticket.id), &outcome)),
        Some(outcome.message().to_string()),
        None,
    )))
}

/// Suggest a resolution for a ticket that has not been filed yet
#[utoipa::path(
    post,
    path = "/api/suggestions",
    request_body = SuggestDraftDto,
    responses(
        (status = 200, description = "Suggestion or fallback message", body = ApiResponse<SuggestionResponseDto>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "suggestions"
)]
pub async fn suggest_for_draft(
    State(state): State<SuggestionState>,
    AppJson(dto): AppJson<SuggestDraftDto>,
) -> Result<Json<ApiResponse<SuggestionResponseDto>>> {
    let outcome = state.handler.suggest(&dto.into()).await;

    Ok(Json(ApiResponse::success(
        Some(SuggestionResponseDto::new(None, &outcome)),
        Some(outcome.message().to_string()),
        None,
    )))
}
