//! Integration Tests Entry Point
//!
//! Tests are organized by module:
//! - `api/` - HTTP endpoint tests against the full router
//! - `common/` - Shared test utilities and in-memory repositories

mod api;
mod common;
