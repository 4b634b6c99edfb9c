//! Bid entity and the admission record derived from a caller's payload.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use super::Actor;

/// A bid placed by one identity on one product.
///
/// The bid is owned by `bidder_id`; only the owner or an administrator may
/// remove it (see [`Bid::can_be_removed_by`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: Uuid,
    pub product_id: Uuid,
    pub bidder_id: Uuid,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

impl Bid {
    /// Creates a new Bid instance.
    pub fn new(
        id: Uuid,
        product_id: Uuid,
        bidder_id: Uuid,
        amount: i64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            bidder_id,
            amount,
            date,
        }
    }

    /// Returns true if `user_id` placed this bid.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.bidder_id == user_id
    }

    /// Removal is allowed for the owner and for administrators, nobody else.
    pub fn can_be_removed_by(&self, actor: &Actor) -> bool {
        self.is_owned_by(actor.user_id) || actor.is_admin
    }
}

/// Caller-supplied bid fields.
///
/// Holds only what the caller is allowed to choose. Product, bidder and date
/// are never taken from here; they are set by [`BidDraft::admit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidDraft {
    pub amount: Option<i64>,
}

impl BidDraft {
    /// Builds the record to persist for this draft.
    ///
    /// `product_id` comes from the request path, the bidder from the
    /// authenticated actor and `date` from the admission clock.
    pub fn admit(self, product_id: Uuid, actor: &Actor, now: DateTime<Utc>) -> NewBid {
        NewBid {
            product_id,
            bidder_id: actor.user_id,
            amount: self.amount,
            date: now,
        }
    }
}

/// Input data for creating a new bid.
///
/// The validation rules are the store schema: every store implementation
/// checks them before inserting.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBid {
    pub product_id: Uuid,
    pub bidder_id: Uuid,
    #[validate(
        required(message = "amount is required"),
        range(min = 1, message = "amount must be a positive integer")
    )]
    pub amount: Option<i64>,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn test_bid(bidder_id: Uuid) -> Bid {
        Bid::new(Uuid::new_v4(), Uuid::new_v4(), bidder_id, 100, fixed_now())
    }

    #[test]
    fn test_admit_sets_derived_fields() {
        let product_id = Uuid::new_v4();
        let actor = Actor::user(Uuid::new_v4());

        let new_bid = BidDraft { amount: Some(100) }.admit(product_id, &actor, fixed_now());

        assert_eq!(new_bid.product_id, product_id);
        assert_eq!(new_bid.bidder_id, actor.user_id);
        assert_eq!(new_bid.amount, Some(100));
        assert_eq!(new_bid.date, fixed_now());
    }

    #[test]
    fn test_admit_keeps_missing_amount_for_the_store() {
        let actor = Actor::user(Uuid::new_v4());
        let new_bid = BidDraft::default().admit(Uuid::new_v4(), &actor, fixed_now());

        assert!(new_bid.amount.is_none());
        assert!(new_bid.validate().is_err());
    }

    #[test]
    fn test_new_bid_validation() {
        let actor = Actor::user(Uuid::new_v4());
        let admit = |amount| BidDraft { amount }.admit(Uuid::new_v4(), &actor, fixed_now());

        assert!(admit(Some(1)).validate().is_ok());
        assert!(admit(Some(0)).validate().is_err());
        assert!(admit(Some(-5)).validate().is_err());
        assert!(admit(None).validate().is_err());
    }

    #[test]
    fn test_owner_can_remove() {
        let owner = Uuid::new_v4();
        let bid = test_bid(owner);

        assert!(bid.is_owned_by(owner));
        assert!(bid.can_be_removed_by(&Actor::user(owner)));
    }

    #[test]
    fn test_admin_can_remove_any_bid() {
        let bid = test_bid(Uuid::new_v4());
        assert!(bid.can_be_removed_by(&Actor::admin(Uuid::new_v4())));
    }

    #[test]
    fn test_stranger_cannot_remove() {
        let bid = test_bid(Uuid::new_v4());
        let stranger = Actor::user(Uuid::new_v4());

        assert!(!bid.is_owned_by(stranger.user_id));
        assert!(!bid.can_be_removed_by(&stranger));
    }
}
