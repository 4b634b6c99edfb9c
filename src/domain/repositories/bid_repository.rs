//! Repository trait for bid data access.

use crate::domain::entities::{Bid, NewBid};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the bid store.
///
/// Each method is a single round trip. Implementations rely on the store's
/// own atomicity; no locking happens above this trait.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBidRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_bid.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Persists a new bid and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the record violates the bid schema
    /// (see the rules on [`NewBid`]).
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_bid: NewBid) -> Result<Bid, AppError>;

    /// Finds a bid by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Bid))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bid>, AppError>;

    /// Deletes a bid.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the bid no
    /// longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
