//! Business logic services for the application layer.

pub mod auth_service;
pub mod bid_service;

pub use auth_service::AuthService;
pub use bid_service::BidService;
