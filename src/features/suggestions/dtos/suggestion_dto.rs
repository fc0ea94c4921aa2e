use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::suggestions::models::{SuggestionOutcome, SuggestionPayload};

/// Draft ticket content submitted before the ticket exists
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestDraftDto {
    pub description: String,
    pub category: String,
}

impl From<SuggestDraftDto> for SuggestionPayload {
    fn from(dto: SuggestDraftDto) -> Self {
        SuggestionPayload::new(dto.description, dto.category)
    }
}

/// Suggestion text to display under a ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponseDto {
    /// Absent for draft tickets
    pub ticket_id: Option<Uuid>,
    /// Suggestion from the API, or the fallback message
    pub suggestion: String,
    pub fallback: bool,
}

impl SuggestionResponseDto {
    pub fn new(ticket_id: Option<Uuid>, outcome: &SuggestionOutcome) -> Self {
        Self {
            ticket_id,
            suggestion: outcome.message().to_string(),
            fallback: outcome.is_fallback(),
        }
    }
}
