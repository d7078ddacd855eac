//! HTTP API tests

mod catalog_tests;
mod health_tests;
mod roll_tests;
