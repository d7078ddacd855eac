//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **RollService**: Dice rolls from typed notation or an entity's formula
//! - **FormulaResolver**: Entity name to stored damage formula
//! - **CatalogService**: "Search all columns" lookup over content tables

pub mod catalog_service;
pub mod formula_resolver;
pub mod roll_service;

// Re-export roll service types
pub use roll_service::{RollProcessor, RollService};

// Re-export formula resolver types
pub use formula_resolver::{extract_formula, FormulaResolver};

// Re-export catalog service types
pub use catalog_service::{CatalogError, CatalogService, CatalogServiceImpl};
