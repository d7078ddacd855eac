//! # DnD Reference Library
//!
//! Backend for a tabletop-game reference tool:
//! - Dice-notation roller (`2d20+3`), standalone or driven by a spell's
//!   stored damage formula
//! - "Search all columns" lookup over game-content tables
//! - JSON HTTP API with health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! - **Domain Layer**: Dice expressions, roll simulation, catalog model and
//!   repository traits
//! - **Application Layer**: Roll orchestration, formula resolution, catalog
//!   search, DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories and metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! dnd_reference/
//! +-- config/         Configuration management
//! +-- domain/         Dice evaluator, catalog model and traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
