//! Named-entity lookup used to resolve stored damage formulas.

use async_trait::async_trait;

use super::catalog::EntityRecord;
use crate::shared::error::AppError;

/// Name of the record field holding a dice formula.
pub const DAMAGE_FIELD: &str = "damage";

/// Finds a game entity by its exact name, ignoring case.
///
/// Implementations return the whole record; interpreting its fields is the
/// caller's job.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<EntityRecord>, AppError>;
}
