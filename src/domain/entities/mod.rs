//! # Domain Entities
//!
//! Game-content records and the data access contracts used to find them.
//!
//! ## Entities
//!
//! - **CatalogTable**: The seven searchable content tables and their columns
//! - **SearchTerm**: Normalized search input (number or lower-cased text)
//! - **EntityRecord**: A single row rendered as JSON
//!
//! ## Repository Traits
//!
//! - **CatalogRepository**: "search all columns" lookup over one table
//! - **EntityLookup**: case-insensitive lookup of a named entity
//!
//! Both traits are implemented in the infrastructure layer.

mod catalog;
mod entity_lookup;

pub use catalog::{CatalogRepository, CatalogTable, EntityRecord, SearchTerm};
pub use entity_lookup::{EntityLookup, DAMAGE_FIELD};
