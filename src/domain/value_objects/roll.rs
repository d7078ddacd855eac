//! Roll request, outcome and result value types.

use serde::{Deserialize, Serialize};

/// Why a roll request produced no outcome.
///
/// Every failure of the roll pipeline is reported as one of these kinds;
/// none of them escape the processor as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RollErrorKind {
    #[error("Invalid dice format, expected NdM with an optional +K or -K modifier")]
    MalformedExpression,

    #[error("Number of dice must be at least 1 and sides at least 2")]
    OutOfRangeDice,

    #[error("Too many dice in a single roll")]
    DiceLimitExceeded,

    #[error("Entity not found")]
    EntityNotFound,

    #[error("Entity record has no usable damage formula")]
    MalformedEntityRecord,

    #[error("Entity lookup is unavailable")]
    LookupFailed,
}

impl RollErrorKind {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RollErrorKind::MalformedExpression => "malformed_expression",
            RollErrorKind::OutOfRangeDice => "out_of_range_dice",
            RollErrorKind::DiceLimitExceeded => "dice_limit_exceeded",
            RollErrorKind::EntityNotFound => "entity_not_found",
            RollErrorKind::MalformedEntityRecord => "malformed_entity_record",
            RollErrorKind::LookupFailed => "lookup_failed",
        }
    }
}

/// Concrete die values and their aggregate for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// One value per die, in draw order
    pub rolls: Vec<u32>,

    /// Signed flat modifier (0 when absent)
    pub modifier: i64,

    /// Sum of `rolls` plus `modifier`
    pub total: i64,
}

/// What the caller asked to roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollRequest {
    /// A dice expression typed by the user
    Manual { expression: String },

    /// The stored damage formula of a named entity (e.g. a spell)
    ByEntityName { name: String },
}

impl RollRequest {
    pub fn manual(expression: impl Into<String>) -> Self {
        RollRequest::Manual {
            expression: expression.into(),
        }
    }

    pub fn by_entity_name(name: impl Into<String>) -> Self {
        RollRequest::ByEntityName { name: name.into() }
    }

    pub fn kind(&self) -> RollRequestKind {
        match self {
            RollRequest::Manual { .. } => RollRequestKind::Manual,
            RollRequest::ByEntityName { .. } => RollRequestKind::ByEntityName,
        }
    }
}

/// Discriminant of a [`RollRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollRequestKind {
    Manual,
    ByEntityName,
}

impl RollRequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollRequestKind::Manual => "manual",
            RollRequestKind::ByEntityName => "by_entity_name",
        }
    }
}

/// How many times a resolved expression is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollMode {
    #[default]
    Single,

    /// Roll twice; the second roll is reported alongside the first
    Advantage,
}

/// Structured result of processing one [`RollRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub request_kind: RollRequestKind,

    /// The dice text that was (or would have been) rolled. Absent when an
    /// entity lookup failed before any formula was known.
    pub resolved_expression: Option<String>,

    /// Exactly one of outcome or error
    pub outcome: Result<RollOutcome, RollErrorKind>,

    /// Independent second roll of the same expression. Only present for
    /// [`RollMode::Advantage`] when `outcome` succeeded.
    pub advantage: Option<RollOutcome>,
}

impl RollResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<RollErrorKind> {
        self.outcome.as_ref().err().copied()
    }
}
