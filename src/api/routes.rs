//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{create_bid_handler, delete_bid_handler, get_bid_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /products/{product_id}/bids` - Place a bid on a product
/// - `GET    /bids/{bid_id}`              - Read a bid
/// - `DELETE /bids/{bid_id}`              - Delete a bid (owner or admin)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/products/{product_id}/bids", post(create_bid_handler))
        .route(
            "/bids/{bid_id}",
            get(get_bid_handler).delete(delete_bid_handler),
        )
}
