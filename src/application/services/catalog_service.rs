//! Catalog Service
//!
//! Handles "search all columns" lookups over the game-content tables.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CatalogRepository, CatalogTable, EntityRecord, SearchTerm};
use crate::shared::error::AppError;

/// Catalog service trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Find the first row of `table` matching the raw user query.
    async fn search(&self, table: CatalogTable, query: &str) -> Result<EntityRecord, CatalogError>;
}

/// Catalog service errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("No {table} entry matches '{query}'")]
    NotFound { table: CatalogTable, query: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::EmptyQuery => AppError::Validation(err.to_string()),
            CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CatalogError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CatalogService implementation
pub struct CatalogServiceImpl<C>
where
    C: CatalogRepository + ?Sized,
{
    catalog_repo: Arc<C>,
}

impl<C> CatalogServiceImpl<C>
where
    C: CatalogRepository + ?Sized,
{
    pub fn new(catalog_repo: Arc<C>) -> Self {
        Self { catalog_repo }
    }
}

#[async_trait]
impl<C> CatalogService for CatalogServiceImpl<C>
where
    C: CatalogRepository + ?Sized,
{
    async fn search(&self, table: CatalogTable, query: &str) -> Result<EntityRecord, CatalogError> {
        let term = SearchTerm::parse(query).map_err(|_| CatalogError::EmptyQuery)?;

        let record = self
            .catalog_repo
            .search(table, &term)
            .await
            .map_err(|e| CatalogError::Internal(e.to_string()))?;

        match record {
            Some(record) => {
                tracing::debug!(table = %table, ?term, "Catalog hit");
                Ok(record)
            }
            None => {
                tracing::debug!(table = %table, ?term, "Catalog miss");
                Err(CatalogError::NotFound {
                    table,
                    query: query.trim().to_string(),
                })
            }
        }
    }
}
