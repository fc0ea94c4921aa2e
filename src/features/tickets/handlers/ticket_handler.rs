use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::tickets::dtos::{TicketListQuery, TicketResponseDto};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ApiResponse, Meta};

/// List tickets
#[utoipa::path(
    get,
    path = "/api/tickets",
    params(TicketListQuery),
    responses(
        (status = 200, description = "Page of tickets, newest first", body = ApiResponse<Vec<TicketResponseDto>>),
        (status = 400, description = "Unknown status filter")
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<ApiResponse<Vec<TicketResponseDto>>>> {
    let (tickets, total) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(tickets),
        None,
        Some(Meta { total }),
    )))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = ApiResponse<TicketResponseDto>),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TicketResponseDto>>> {
    let ticket = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(ticket), None, None)))
}
