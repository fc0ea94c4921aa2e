use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{TicketListQuery, TicketResponseDto};
use crate::features::tickets::models::Ticket;
use crate::features::tickets::services::TicketRepository;
use crate::shared::types::page_window;

/// Service for ticket operations
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// Load the raw ticket record
    pub async fn find(&self, id: Uuid) -> Result<Ticket> {
        let ticket = self.repository.find_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get ticket by ID: {:?}", e);
            AppError::Database(e)
        })?;

        ticket.ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<TicketResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// List tickets with optional status/category/search filters
    pub async fn list(&self, query: &TicketListQuery) -> Result<(Vec<TicketResponseDto>, i64)> {
        let filter = query.filter().map_err(AppError::BadRequest)?;
        let (limit, offset) = page_window(query.page, query.page_size);

        let (tickets, total) = self
            .repository
            .list(&filter, limit, offset)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tickets: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((tickets.into_iter().map(Into::into).collect(), total))
    }
}
