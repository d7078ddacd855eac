//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dnd_reference::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Rolling at most {} dice per request", settings.dice.max_dice);
//! ```

mod settings;

pub use settings::*;
