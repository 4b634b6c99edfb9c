//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules, and give HTTP
//! handlers a small API that takes the caller's identity explicitly.
//!
//! # Available Services
//!
//! - [`services::bid_service::BidService`] - Bid admission, lookup and removal
//! - [`services::auth_service::AuthService`] - Bearer token to [`crate::domain::entities::Actor`] resolution

pub mod services;
