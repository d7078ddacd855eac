//! Formula Resolver
//!
//! Turns an entity name into the dice formula stored on its record.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{EntityLookup, EntityRecord, RollErrorKind, DAMAGE_FIELD};

/// Resolves the damage formula of a named entity through an [`EntityLookup`].
///
/// Name matching (including case folding) belongs to the lookup; the
/// resolver only interprets the returned record.
pub struct FormulaResolver<L>
where
    L: EntityLookup + ?Sized,
{
    lookup: Arc<L>,
}

impl<L> FormulaResolver<L>
where
    L: EntityLookup + ?Sized,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Fetch the formula stored on `entity_name`.
    ///
    /// # Errors
    ///
    /// - [`RollErrorKind::EntityNotFound`] if the lookup has no such entity
    /// - [`RollErrorKind::MalformedEntityRecord`] if the record has no usable
    ///   `damage` string
    /// - [`RollErrorKind::LookupFailed`] if the lookup itself failed
    pub async fn resolve_formula(&self, entity_name: &str) -> Result<String, RollErrorKind> {
        let record = self
            .lookup
            .find_by_name(entity_name)
            .await
            .map_err(|e| {
                tracing::error!(entity = %entity_name, error = %e, "Entity lookup failed");
                RollErrorKind::LookupFailed
            })?
            .ok_or(RollErrorKind::EntityNotFound)?;

        extract_formula(&record)
    }
}

/// Read the `damage` field of a record.
///
/// The record must be a JSON object whose `damage` is a non-blank string.
pub fn extract_formula(record: &EntityRecord) -> Result<String, RollErrorKind> {
    match record.as_object().and_then(|fields| fields.get(DAMAGE_FIELD)) {
        Some(Value::String(formula)) if !formula.trim().is_empty() => Ok(formula.clone()),
        _ => Err(RollErrorKind::MalformedEntityRecord),
    }
}
