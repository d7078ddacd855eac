//! Spell Repository Implementation
//!
//! PostgreSQL implementation of EntityLookup over the `spells` table.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use super::catalog_repository::RecordRow;
use crate::domain::{EntityLookup, EntityRecord};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// PostgreSQL spell lookup.
#[derive(Clone)]
pub struct PgSpellRepository {
    pool: PgPool,
}

impl PgSpellRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityLookup for PgSpellRepository {
    /// Find a spell by name, ignoring case.
    async fn find_by_name(&self, name: &str) -> Result<Option<EntityRecord>, AppError> {
        let start = Instant::now();

        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT to_jsonb(s) AS record
            FROM spells s
            WHERE LOWER(s.name) = LOWER($1)
            ORDER BY s.id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        metrics::record_db_query("find_by_name", "spells", start.elapsed().as_secs_f64());

        Ok(row.map(|r| r.record.0))
    }
}
