//! Dice simulation domain service.

use std::collections::VecDeque;

use rand::Rng;

use crate::domain::value_objects::{DiceExpression, RollOutcome};

/// Source of uniformly distributed integers.
///
/// Injected into the simulator so tests can supply deterministic draws.
pub trait RandomSource {
    /// Draw an integer in the closed interval `[low, high]`.
    fn next_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each value is clamped into the requested interval so a script written for
/// one die size never produces an impossible face on another. Once the
/// script is exhausted the last value is repeated (or `low` if the script
/// was empty).
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: VecDeque<u32>,
    last: Option<u32>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: None,
        }
    }

    /// A script that always yields `value`.
    pub fn constant(value: u32) -> Self {
        Self {
            values: VecDeque::new(),
            last: Some(value),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        let value = match self.values.pop_front() {
            Some(value) => {
                self.last = Some(value);
                value
            }
            None => self.last.unwrap_or(low),
        };
        value.clamp(low, high)
    }
}

/// Domain service that turns a parsed expression into a concrete outcome.
pub struct DiceSimulator;

impl DiceSimulator {
    /// Roll every die in `expr` once, in order, and total the result.
    pub fn simulate<R>(expr: &DiceExpression, rng: &mut R) -> RollOutcome
    where
        R: RandomSource + ?Sized,
    {
        let rolls: Vec<u32> = (0..expr.count())
            .map(|_| rng.next_int(1, expr.sides()))
            .collect();

        let sum: i64 = rolls.iter().map(|&roll| i64::from(roll)).sum();
        let modifier = expr.signed_modifier();

        RollOutcome {
            rolls,
            modifier,
            total: sum + modifier,
        }
    }
}
