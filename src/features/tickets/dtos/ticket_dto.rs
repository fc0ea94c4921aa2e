use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::tickets::models::{Ticket, TicketStatus};
use crate::shared::types::{default_page, default_page_size};

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            category: t.category,
            status: t.status,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Query parameters for listing tickets
///
/// `status` and `category` accept the literal `all` to disable the filter.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TicketListQuery {
    /// `open`, `in_progress`, `resolved` or `all`
    pub status: Option<String>,
    /// Exact category name or `all`
    pub category: Option<String>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1, pages past 1000000 read as 1000000)
    #[serde(default = "default_page")]
    #[param(minimum = 1, maximum = 1000000)]
    pub page: i64,
    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

/// Normalized ticket filter handed to the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl TicketListQuery {
    pub fn filter(&self) -> Result<TicketFilter, String> {
        let status = active(self.status.as_deref())
            .map(str::parse::<TicketStatus>)
            .transpose()?;

        Ok(TicketFilter {
            status,
            category: active(self.category.as_deref()).map(str::to_string),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

/// Drops empty values and the `all` sentinel
fn active(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}
