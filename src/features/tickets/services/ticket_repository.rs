use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::features::tickets::dtos::TicketFilter;
use crate::features::tickets::models::Ticket;

/// Read access to tickets owned by the front office
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, sqlx::Error>;

    /// Page of tickets matching `filter`, newest first, plus the total match count
    async fn list(
        &self,
        filter: &TicketFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Ticket>, i64), sqlx::Error>;
}

/// Postgres-backed ticket repository
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const TICKET_COLUMNS: &str = "id, title, description, category, status, created_at, updated_at";

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &TicketFilter) {
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(category) = &filter.category {
        builder.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\' OR description ILIKE ")
            .push_bind(pattern)
            .push(r" ESCAPE '\')");
    }
}

/// Substring pattern where `%`, `_` and `\` in the search text match literally
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {} FROM tickets WHERE id = $1",
            TICKET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list(
        &self,
        filter: &TicketFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Ticket>, i64), sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM tickets WHERE TRUE");
        push_filters(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM tickets WHERE TRUE",
            TICKET_COLUMNS
        ));
        push_filters(&mut select, filter);
        select
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let tickets = select
            .build_query_as::<Ticket>()
            .fetch_all(&self.pool)
            .await?;

        Ok((tickets, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("printer"), "%printer%");
        assert_eq!(like_pattern("100%"), r"%100\%%");
        assert_eq!(like_pattern("disk_full"), r"%disk\_full%");
        assert_eq!(like_pattern(r"C:\temp"), r"%C:\\temp%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_search_filter_sql_declares_escape() {
        let filter = TicketFilter {
            search: Some("50%_off".to_string()),
            ..Default::default()
        };
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM tickets WHERE TRUE");
        push_filters(&mut builder, &filter);

        assert_eq!(
            builder.sql(),
            r"SELECT 1 FROM tickets WHERE TRUE AND (title ILIKE $1 ESCAPE '\' OR description ILIKE $2 ESCAPE '\')"
        );
    }
}
