//! Catalog Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::application::dto::request::CatalogQuery;
use crate::application::dto::response::CatalogResponse;
use crate::application::services::CatalogError;
use crate::domain::CatalogTable;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Searchable table listing entry
#[derive(Debug, Serialize)]
pub struct CatalogTableResponse {
    pub slug: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// List the searchable tables
pub async fn list_tables() -> Json<Vec<CatalogTableResponse>> {
    let tables = CatalogTable::ALL
        .into_iter()
        .map(|table| CatalogTableResponse {
            slug: table.slug(),
            table: table.table_name(),
            columns: table.columns(),
        })
        .collect();

    Json(tables)
}

/// Find the first row of a table matching `?q=`
///
/// Numeric queries match columns equal to the number; anything else matches
/// columns containing the text, ignoring case.
pub async fn search(
    State(state): State<AppState>,
    Path(table): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, AppError> {
    let table: CatalogTable = table.parse()?;
    query.validate().map_err(validation_error)?;

    match state.catalog.search(table, &query.q).await {
        Ok(record) => {
            metrics::record_catalog_lookup(table.table_name(), "hit");
            Ok(Json(CatalogResponse { result: record }))
        }
        Err(e) => {
            let outcome = match &e {
                CatalogError::NotFound { .. } => "miss",
                CatalogError::EmptyQuery => "invalid",
                CatalogError::Internal(_) => "error",
            };
            metrics::record_catalog_lookup(table.table_name(), outcome);
            Err(e.into())
        }
    }
}
