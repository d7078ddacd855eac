//! Catalog Repository Implementation
//!
//! PostgreSQL implementation of the CatalogRepository trait.
//! Rows are returned whole, rendered by `to_jsonb`.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::{CatalogRepository, CatalogTable, EntityRecord, SearchTerm};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Single-column row holding a JSON-rendered record.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RecordRow {
    pub(crate) record: Json<EntityRecord>,
}

/// Build the "search all columns" query for `table`.
///
/// Every searchable column is cast to text and compared against the single
/// bound parameter `$1`: with `=` for numeric terms, `ILIKE` for text.
/// Only whitelisted identifiers from [`CatalogTable::columns`] are
/// interpolated.
pub fn build_search_query(table: CatalogTable, term: &SearchTerm) -> String {
    let operator = match term {
        SearchTerm::Number(_) => "=",
        SearchTerm::Text(_) => "ILIKE",
    };

    let predicate = table
        .columns()
        .iter()
        .map(|column| {
            format!(
                "CAST(t.\"{}\" AS TEXT) {} $1",
                column.to_lowercase(),
                operator
            )
        })
        .collect::<Vec<_>>()
        .join(" OR ");

    format!(
        "SELECT to_jsonb(t) AS record FROM {} t WHERE {} ORDER BY t.id LIMIT 1",
        table.table_name(),
        predicate
    )
}

/// PostgreSQL catalog repository implementation.
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    /// Create a new PgCatalogRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn search(
        &self,
        table: CatalogTable,
        term: &SearchTerm,
    ) -> Result<Option<EntityRecord>, AppError> {
        let sql = build_search_query(table, term);
        let start = Instant::now();

        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(term.sql_pattern())
            .fetch_optional(&self.pool)
            .await?;

        metrics::record_db_query("search", table.table_name(), start.elapsed().as_secs_f64());

        Ok(row.map(|r| r.record.0))
    }
}
