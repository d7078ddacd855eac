//! Response DTOs
//!
//! Data structures for API response bodies.

use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::{EntityRecord, RollErrorKind, RollOutcome, RollResult};

/// Successful roll: `{"rolls": [..], "modifier": k, "total": t, "expression": ".."}`
///
/// Rolls with advantage also carry `"advantage": {"rolls", "modifier", "total"}`.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    pub rolls: Vec<u32>,
    pub modifier: i64,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advantage: Option<AdvantageRoll>,
}

/// Second roll of an advantage request
#[derive(Debug, Serialize)]
pub struct AdvantageRoll {
    pub rolls: Vec<u32>,
    pub modifier: i64,
    pub total: i64,
}

impl From<RollOutcome> for AdvantageRoll {
    fn from(outcome: RollOutcome) -> Self {
        Self {
            rolls: outcome.rolls,
            modifier: outcome.modifier,
            total: outcome.total,
        }
    }
}

impl RollResponse {
    pub fn from_outcome(
        outcome: RollOutcome,
        expression: Option<String>,
        advantage: Option<RollOutcome>,
    ) -> Self {
        Self {
            rolls: outcome.rolls,
            modifier: outcome.modifier,
            total: outcome.total,
            expression,
            advantage: advantage.map(AdvantageRoll::from),
        }
    }
}

/// Failed roll: `{"error": "..", "kind": ".."}`
#[derive(Debug, Serialize)]
pub struct RollErrorResponse {
    pub error: String,
    pub kind: RollErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl RollErrorResponse {
    pub fn new(kind: RollErrorKind, expression: Option<String>) -> Self {
        Self {
            error: kind.to_string(),
            kind,
            expression,
        }
    }

    /// HTTP status for a failed roll.
    pub fn status_code(&self) -> StatusCode {
        match self.kind {
            RollErrorKind::MalformedExpression
            | RollErrorKind::OutOfRangeDice
            | RollErrorKind::DiceLimitExceeded => StatusCode::UNPROCESSABLE_ENTITY,
            RollErrorKind::EntityNotFound => StatusCode::NOT_FOUND,
            RollErrorKind::MalformedEntityRecord => StatusCode::INTERNAL_SERVER_ERROR,
            RollErrorKind::LookupFailed => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Split a roll result into its success or failure body.
pub fn roll_result_body(result: RollResult) -> Result<RollResponse, RollErrorResponse> {
    match result.outcome {
        Ok(outcome) => Ok(RollResponse::from_outcome(
            outcome,
            result.resolved_expression,
            result.advantage,
        )),
        Err(kind) => Err(RollErrorResponse::new(kind, result.resolved_expression)),
    }
}

/// Catalog search hit: `{"result": {..row..}}`
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub result: EntityRecord,
}
