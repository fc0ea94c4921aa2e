use crate::core::config::SuggestionApiConfig;
use crate::features::suggestions::clients::{SuggestionApiClient, SuggestionClientError};
use crate::features::suggestions::models::{SuggestionOutcome, SuggestionPayload};
use crate::features::tickets::models::Ticket;

/// Fetches an AI suggestion for a ticket, falling back to a fixed message
///
/// A non-200 status, a malformed body and an unreachable API all produce the
/// same fallback outcome; the cause only goes to the log.
pub struct TicketSuggestionHandler {
    client: SuggestionApiClient,
}

impl TicketSuggestionHandler {
    pub fn new(config: &SuggestionApiConfig) -> Result<Self, SuggestionClientError> {
        Ok(Self {
            client: SuggestionApiClient::new(config)?,
        })
    }

    pub async fn handle(&self, ticket: &Ticket) -> SuggestionOutcome {
        let outcome = self.suggest(&SuggestionPayload::from(ticket)).await;
        tracing::info!(
            "Suggestion for ticket {}: {}",
            ticket.id,
            if outcome.is_fallback() { "fallback" } else { "received" }
        );
        outcome
    }

    pub async fn suggest(&self, payload: &SuggestionPayload) -> SuggestionOutcome {
        tracing::debug!(
            "Requesting suggestion from {} (category={})",
            self.client.endpoint_url(),
            payload.category
        );

        match self.client.request_suggestion(payload).await {
            Ok(text) => SuggestionOutcome::Suggestion(text),
            Err(e) => {
                tracing::warn!("No suggestion available: {}", e);
                SuggestionOutcome::Fallback
            }
        }
    }
}
