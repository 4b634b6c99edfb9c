//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are bound with runtime parameters and mapped through
//! `sqlx::FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgBidRepository`] - Bid storage
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_bid_repository;
pub mod pg_token_repository;

pub use pg_bid_repository::PgBidRepository;
pub use pg_token_repository::PgTokenRepository;
