//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCatalogRepository** - "search all columns" over the content tables
//! - **PgSpellRepository** - case-insensitive spell lookup by name
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCatalogRepository, PgSpellRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let catalog_repo = PgCatalogRepository::new(pool.clone());
//!     let spell_repo = PgSpellRepository::new(pool);
//! }
//! ```

pub mod catalog_repository;
pub mod spell_repository;

pub use catalog_repository::{build_search_query, PgCatalogRepository};
pub use spell_repository::PgSpellRepository;
