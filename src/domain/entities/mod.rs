//! Core domain entities.
//!
//! Entities are plain data structures. Separate structs describe creation
//! input so that store-assigned fields never appear in caller-built values:
//!
//! - [`Bid`] - A persisted bid
//! - [`BidDraft`] - Fields a caller may choose for a new bid
//! - [`NewBid`] - The record handed to the store at admission
//! - [`Actor`] - The authenticated caller

pub mod actor;
pub mod bid;

pub use actor::Actor;
pub use bid::{Bid, BidDraft, NewBid};
