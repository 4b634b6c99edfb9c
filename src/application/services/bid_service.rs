//! Bid admission, lookup and removal.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::entities::{Actor, Bid, BidDraft};
use crate::domain::repositories::BidRepository;
use crate::error::AppError;

/// Service implementing the bid lifecycle: `nonexistent → active → deleted`.
///
/// Every operation receives the calling [`Actor`] explicitly. The service
/// holds no mutable state; concurrent requests only meet in the store.
pub struct BidService {
    repository: Arc<dyn BidRepository>,
    clock: Arc<dyn Clock>,
}

impl BidService {
    /// Creates a new bid service.
    pub fn new(repository: Arc<dyn BidRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Admits a new bid on `product_id` for `actor`.
    ///
    /// The product comes from the caller's path, the bidder is always the
    /// actor and the date is the clock reading at admission. Whatever the
    /// caller may have sent for those fields is never consulted.
    ///
    /// The product is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store rejects the draft
    /// (missing or non-positive amount).
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn place_bid(
        &self,
        product_id: Uuid,
        actor: &Actor,
        draft: BidDraft,
    ) -> Result<Bid, AppError> {
        let new_bid = draft.admit(product_id, actor, self.clock.now());

        let bid = self.repository.create(new_bid).await?;

        tracing::info!(
            bid_id = %bid.id,
            product_id = %bid.product_id,
            bidder_id = %bid.bidder_id,
            amount = bid.amount,
            "Bid placed"
        );

        Ok(bid)
    }

    /// Retrieves a bid by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bid has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_bid(&self, bid_id: Uuid) -> Result<Bid, AppError> {
        self.repository
            .find_by_id(bid_id)
            .await?
            .ok_or_else(|| AppError::not_found("Bid not found", json!({ "bid_id": bid_id })))
    }

    /// Removes a bid on behalf of `actor`.
    ///
    /// # Flow
    ///
    /// 1. Look the bid up (unknown id → not found)
    /// 2. Check the actor owns it or is an administrator (else forbidden)
    /// 3. Delete it; if the row is already gone, a concurrent removal won
    ///    and the result is not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the bid does not exist.
    /// Returns [`AppError::Forbidden`] if the actor is neither owner nor admin.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_bid(&self, bid_id: Uuid, actor: &Actor) -> Result<(), AppError> {
        let bid = self.get_bid(bid_id).await?;

        if !bid.can_be_removed_by(actor) {
            tracing::warn!(
                bid_id = %bid.id,
                owner = %bid.bidder_id,
                actor = %actor.user_id,
                "Bid removal refused"
            );
            return Err(AppError::forbidden(
                "Forbidden",
                json!({ "reason": "Only the bidder or an administrator can delete this bid" }),
            ));
        }

        if !self.repository.delete(bid.id).await? {
            return Err(AppError::not_found(
                "Bid not found",
                json!({ "bid_id": bid_id }),
            ));
        }

        tracing::info!(
            bid_id = %bid.id,
            actor = %actor.user_id,
            as_admin = actor.is_admin && !bid.is_owned_by(actor.user_id),
            "Bid removed"
        );

        Ok(())
    }

    /// Checks that the bid store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the store's error if it cannot be queried.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
