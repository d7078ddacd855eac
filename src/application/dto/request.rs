//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{RollMode, RollRequest};
use crate::shared::error::AppError;

/// Longest accepted roll input (expression or entity name)
pub const MAX_ROLL_INPUT_LENGTH: u64 = 200;

/// Longest accepted catalog search query
pub const MAX_SEARCH_QUERY_LENGTH: u64 = 200;

/// How the `value` of a roll request should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollInputType {
    /// `value` is dice notation
    Manual,
    /// `value` is a spell name whose damage formula is rolled
    Spell,
}

/// Roll request body: `{"input_type": "manual" | "spell", "value": "...", "advantage": bool}`
#[derive(Debug, Deserialize, Validate)]
pub struct RollRequestBody {
    pub input_type: RollInputType,

    #[validate(length(
        min = 1,
        max = MAX_ROLL_INPUT_LENGTH,
        message = "Value must be 1-200 characters"
    ))]
    pub value: String,

    /// Roll the expression a second time alongside the first
    #[serde(default)]
    pub advantage: bool,
}

impl RollRequestBody {
    pub fn roll_mode(&self) -> RollMode {
        if self.advantage {
            RollMode::Advantage
        } else {
            RollMode::Single
        }
    }

    /// Convert into a domain request, trimming surrounding whitespace.
    pub fn into_roll_request(self) -> Result<RollRequest, AppError> {
        let value = self.value.trim();
        if value.is_empty() {
            return Err(AppError::Validation("value: Value must not be blank".into()));
        }

        Ok(match self.input_type {
            RollInputType::Manual => RollRequest::manual(value),
            RollInputType::Spell => RollRequest::by_entity_name(value),
        })
    }
}

/// Catalog search query string: `?q=...`
#[derive(Debug, Deserialize, Validate)]
pub struct CatalogQuery {
    #[validate(length(
        max = MAX_SEARCH_QUERY_LENGTH,
        message = "Query must be at most 200 characters"
    ))]
    #[serde(default)]
    pub q: String,
}
