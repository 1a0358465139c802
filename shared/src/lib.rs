//! Shared types for the shopdesk admin console
//!
//! Wire types mirrored from the storefront REST backend: the response
//! envelope, pagination metadata, entity records with their create/update
//! payloads, auth DTOs and list filter queries.

pub mod client;
pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use response::{ApiResponse, Page, Pagination};
pub use serde::{Deserialize, Serialize};
