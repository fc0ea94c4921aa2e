use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::suggestions::handlers;
use crate::features::suggestions::services::TicketSuggestionHandler;
use crate::features::tickets::TicketService;

#[derive(Clone)]
pub struct SuggestionState {
    pub tickets: Arc<TicketService>,
    pub handler: Arc<TicketSuggestionHandler>,
}

/// Create routes for AI suggestions
pub fn routes(state: SuggestionState) -> Router {
    Router::new()
        .route(
            "/api/tickets/{id}/suggestion",
            post(handlers::suggest_for_ticket),
        )
        .route("/api/suggestions", post(handlers::suggest_for_draft))
        .with_state(state)
}
