//! Handlers for bid endpoints (create, read, delete).
//!
//! The caller's identity is put into request extensions by
//! [`crate::api::middleware::auth::layer`] and handed to the service as an
//! explicit argument.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::bid::{BidResponse, CreateBidRequest};
use crate::domain::entities::Actor;
use crate::error::AppError;
use crate::state::AppState;

/// Places a bid on a product.
///
/// # Endpoint
///
/// `POST /api/products/{productId}/bids`
///
/// # Request Body
///
/// ```json
/// { "amount": 100 }
/// ```
///
/// `productId`, `bidderId` and `date` are set by the server. Values for them
/// in the body are ignored.
///
/// # Response
///
/// **201 Created** with the stored bid:
///
/// ```json
/// {
///   "id": "6f1c…",
///   "productId": "0a9e…",
///   "bidderId": "c2d4…",
///   "amount": 100,
///   "date": "2025-06-01T09:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `amount` is missing or
/// not positive, or `productId` is not a UUID.
pub async fn create_bid_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<CreateBidRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BidResponse>), AppError> {
    let product_id = Uuid::parse_str(&product_id).map_err(|_| {
        AppError::bad_request(
            "Invalid product id",
            json!({ "product_id": product_id, "reason": "expected a UUID" }),
        )
    })?;
    let Json(payload) = payload?;

    let bid = state
        .bid_service
        .place_bid(product_id, &actor, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(bid.into())))
}

/// Returns a single bid.
///
/// # Endpoint
///
/// `GET /api/bids/{bidId}`
///
/// # Errors
///
/// Returns 404 Not Found if the bid does not exist.
pub async fn get_bid_handler(
    Path(bid_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BidResponse>, AppError> {
    let bid_id = parse_bid_id(&bid_id)?;

    let bid = state.bid_service.get_bid(bid_id).await?;

    Ok(Json(bid.into()))
}

/// Deletes a bid.
///
/// # Endpoint
///
/// `DELETE /api/bids/{bidId}`
///
/// # Authorization
///
/// Allowed for the bidder who placed the bid and for administrators.
///
/// # Errors
///
/// - 404 Not Found if the bid does not exist (checked before authorization)
/// - 403 Forbidden if the caller is neither the bidder nor an administrator
pub async fn delete_bid_handler(
    Path(bid_id): Path<String>,
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<StatusCode, AppError> {
    let bid_id = parse_bid_id(&bid_id)?;

    state.bid_service.remove_bid(bid_id, &actor).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// A malformed id cannot name any bid, so it is reported as not found.
fn parse_bid_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::not_found("Bid not found", json!({ "bid_id": raw })))
}
