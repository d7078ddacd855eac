//! Dice Expression Value Object
//!
//! Parses and validates compact dice notation such as `2d6+3`, `1d20`
//! or `4D8 - 2`.
//!
//! ## Grammar
//!
//! ```text
//! <count> d <sides> [ ws* (+|-) ws* <modifier> ]
//! ```
//!
//! The `d` separator is case-insensitive. The match is anchored at the start
//! of the input; anything after a valid prefix is ignored, so stored formulas
//! like `8d6 fire` resolve to `8d6`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::roll::RollErrorKind;

/// Minimum number of dice in an expression
pub const MIN_DICE_COUNT: u32 = 1;

/// Minimum number of sides on a die
pub const MIN_DIE_SIDES: u32 = 2;

static DICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)[dD]([0-9]+)(?:\s*([+-])\s*([0-9]+))?")
        .expect("dice pattern must compile")
});

/// Sign of the flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Apply this sign to a magnitude.
    pub fn apply(self, magnitude: u32) -> i64 {
        match self {
            Sign::Plus => i64::from(magnitude),
            Sign::Minus => -i64::from(magnitude),
        }
    }

    fn from_symbol(symbol: &str) -> Self {
        if symbol == "-" {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }
}

/// A parsed dice expression (`NdM±K`).
///
/// Values are only produced by [`DiceExpression::parse`] or
/// [`DiceExpression::new`], both of which reject `count < 1` and
/// `sides < 2`, so every live value satisfies those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    sign: Sign,
    modifier: u32,
}

impl DiceExpression {
    /// Build an expression from its parts, enforcing the dice bounds.
    pub fn new(count: u32, sides: u32, sign: Sign, modifier: u32) -> Result<Self, RollErrorKind> {
        if count < MIN_DICE_COUNT || sides < MIN_DIE_SIDES {
            return Err(RollErrorKind::OutOfRangeDice);
        }

        Ok(Self {
            count,
            sides,
            sign,
            modifier,
        })
    }

    /// Parse dice notation.
    ///
    /// # Errors
    ///
    /// - [`RollErrorKind::MalformedExpression`] if the text does not start
    ///   with a dice expression, or a number does not fit in `u32`
    /// - [`RollErrorKind::OutOfRangeDice`] if `count < 1` or `sides < 2`
    pub fn parse(text: &str) -> Result<Self, RollErrorKind> {
        let captures = DICE_PATTERN
            .captures(text)
            .ok_or(RollErrorKind::MalformedExpression)?;

        let count = parse_number(&captures[1])?;
        let sides = parse_number(&captures[2])?;

        let (sign, modifier) = match (captures.get(3), captures.get(4)) {
            (Some(sign), Some(modifier)) => {
                (Sign::from_symbol(sign.as_str()), parse_number(modifier.as_str())?)
            }
            _ => (Sign::Plus, 0),
        };

        Self::new(count, sides, sign, modifier)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Unsigned magnitude of the modifier (0 when absent).
    pub fn modifier(&self) -> u32 {
        self.modifier
    }

    /// Modifier with its sign applied.
    pub fn signed_modifier(&self) -> i64 {
        self.sign.apply(self.modifier)
    }

    /// Lowest possible total (every die shows 1).
    pub fn min(&self) -> i64 {
        i64::from(self.count) + self.signed_modifier()
    }

    /// Highest possible total (every die shows its top face).
    pub fn max(&self) -> i64 {
        i64::from(self.count) * i64::from(self.sides) + self.signed_modifier()
    }
}

fn parse_number(digits: &str) -> Result<u32, RollErrorKind> {
    digits
        .parse()
        .map_err(|_| RollErrorKind::MalformedExpression)
}

impl FromStr for DiceExpression {
    type Err = RollErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match (self.sign, self.modifier) {
            (_, 0) => Ok(()),
            (Sign::Plus, m) => write!(f, "+{}", m),
            (Sign::Minus, m) => write!(f, "-{}", m),
        }
    }
}
