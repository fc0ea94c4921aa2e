use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature (read-only)
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route("/api/tickets", get(handlers::list_tickets))
        .route("/api/tickets/{id}", get(handlers::get_ticket))
        .with_state(service)
}
