//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the bid store and the token store. Concrete
//! implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BidRepository`] - Bid create / lookup / delete
//! - [`TokenRepository`] - API token authentication and management

pub mod bid_repository;
pub mod token_repository;

pub use bid_repository::BidRepository;
pub use token_repository::{ApiToken, NewApiToken, TokenRepository};

#[cfg(test)]
pub use bid_repository::MockBidRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
