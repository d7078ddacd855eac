//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CatalogQuery, RollInputType, RollRequestBody};
pub use response::{
    roll_result_body, AdvantageRoll, CatalogResponse, RollErrorResponse, RollResponse,
};
