//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **DiceExpression**: Parsed `NdM±K` dice notation
//! - **RollRequest / RollResult**: Input and structured output of a roll
//! - **RollOutcome**: Individual die values with modifier and total
//! - **RollErrorKind**: Stable, distinguishable failure kinds

mod dice_expression;
mod roll;

pub use dice_expression::*;
pub use roll::*;
