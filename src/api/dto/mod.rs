//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Bid payloads use camelCase keys.

pub mod bid;
pub mod health;
