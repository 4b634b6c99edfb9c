//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bids;
pub mod health;

pub use bids::{create_bid_handler, delete_bid_handler, get_bid_handler};
pub use health::health_handler;
