//! # Domain Layer
//!
//! The domain layer contains the dice evaluator and the game-content model.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Catalog tables, search terms and repository traits
//! - **value_objects**: Dice expressions, roll requests and results
//! - **services**: Dice simulation against an injected randomness source
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Randomness and entity lookup are injected capabilities
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
