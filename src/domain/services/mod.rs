//! # Domain Services
//!
//! Domain services encapsulate logic that doesn't naturally belong to a
//! single value object.
//!
//! ## Services
//!
//! - **DiceSimulator**: Rolls a parsed dice expression against an injected
//!   randomness source

mod dice_simulator;

pub use dice_simulator::*;
