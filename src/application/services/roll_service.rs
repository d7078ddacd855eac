//! Roll Service
//!
//! Orchestrates a roll request: resolve the dice text (directly or through
//! an entity's stored formula), parse it, simulate it and report a
//! structured [`RollResult`]. Every failure comes back as a typed result.

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::formula_resolver::FormulaResolver;
use crate::config::DEFAULT_MAX_DICE;
use crate::domain::{
    DiceExpression, DiceSimulator, EntityLookup, RandomSource, RollErrorKind, RollMode,
    RollOutcome, RollRequest, RollResult,
};

/// Roll service trait
#[async_trait]
pub trait RollService: Send + Sync {
    /// Process a roll request with fresh, OS-seeded randomness.
    async fn roll(&self, request: RollRequest, mode: RollMode) -> RollResult;
}

/// Processes roll requests against an entity lookup.
pub struct RollProcessor<L>
where
    L: EntityLookup + ?Sized,
{
    resolver: FormulaResolver<L>,
    max_dice: u32,
}

impl<L> RollProcessor<L>
where
    L: EntityLookup + ?Sized,
{
    /// Create a processor capped at [`DEFAULT_MAX_DICE`] dice per roll.
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            resolver: FormulaResolver::new(lookup),
            max_dice: DEFAULT_MAX_DICE,
        }
    }

    /// Reject expressions rolling more than `max_dice` dice.
    pub fn with_dice_limit(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Process one request using the supplied randomness source.
    pub async fn process<R>(&self, request: RollRequest, mode: RollMode, rng: &mut R) -> RollResult
    where
        R: RandomSource + Send + ?Sized,
    {
        let request_kind = request.kind();

        let (resolved_expression, evaluated) = match request {
            RollRequest::Manual { expression } => {
                let evaluated = self.evaluate(&expression, mode, rng);
                (Some(expression), evaluated)
            }
            RollRequest::ByEntityName { name } => {
                match self.resolver.resolve_formula(&name).await {
                    Ok(formula) => {
                        tracing::debug!(entity = %name, formula = %formula, "Resolved entity formula");
                        let evaluated = self.evaluate(&formula, mode, rng);
                        (Some(formula), evaluated)
                    }
                    Err(kind) => (None, Err(kind)),
                }
            }
        };

        let (outcome, advantage) = match evaluated {
            Ok((first, second)) => (Ok(first), second),
            Err(kind) => (Err(kind), None),
        };

        match &outcome {
            Ok(rolled) => tracing::debug!(
                kind = request_kind.as_str(),
                expression = resolved_expression.as_deref().unwrap_or_default(),
                total = rolled.total,
                advantage_total = advantage.as_ref().map(|second| second.total),
                "Dice rolled"
            ),
            Err(error) => tracing::info!(
                kind = request_kind.as_str(),
                expression = resolved_expression.as_deref().unwrap_or_default(),
                error = error.as_str(),
                "Roll rejected"
            ),
        }

        RollResult {
            request_kind,
            resolved_expression,
            outcome,
            advantage,
        }
    }

    /// Parse `text` and roll it once, or twice with advantage.
    fn evaluate<R>(
        &self,
        text: &str,
        mode: RollMode,
        rng: &mut R,
    ) -> Result<(RollOutcome, Option<RollOutcome>), RollErrorKind>
    where
        R: RandomSource + ?Sized,
    {
        let expr = DiceExpression::parse(text)?;

        if expr.count() > self.max_dice {
            return Err(RollErrorKind::DiceLimitExceeded);
        }

        let first = DiceSimulator::simulate(&expr, rng);
        let second = match mode {
            RollMode::Single => None,
            RollMode::Advantage => Some(DiceSimulator::simulate(&expr, rng)),
        };

        Ok((first, second))
    }
}

#[async_trait]
impl<L> RollService for RollProcessor<L>
where
    L: EntityLookup + ?Sized,
{
    async fn roll(&self, request: RollRequest, mode: RollMode) -> RollResult {
        let mut rng = StdRng::from_os_rng();
        self.process(request, mode, &mut rng).await
    }
}
