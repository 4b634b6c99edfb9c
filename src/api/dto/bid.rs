//! DTOs for bid endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Bid, BidDraft};

/// Request body for `POST /api/products/{productId}/bids`.
///
/// Only `amount` is read. Keys such as `productId`, `bidderId` or `date` are
/// accepted in the body but ignored; those values are derived server-side.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    pub amount: Option<i64>,
}

impl From<CreateBidRequest> for BidDraft {
    fn from(req: CreateBidRequest) -> Self {
        BidDraft { amount: req.amount }
    }
}

/// JSON representation of a bid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub bidder_id: Uuid,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            product_id: bid.product_id,
            bidder_id: bid.bidder_id,
            amount: bid.amount,
            date: bid.date,
        }
    }
}
