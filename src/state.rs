//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BidService};

/// Services shared by all requests.
///
/// Cloning is cheap; every field is reference counted. The state carries no
/// per-request data: the caller's identity travels in request extensions.
#[derive(Clone)]
pub struct AppState {
    pub bid_service: Arc<BidService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(bid_service: Arc<BidService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            bid_service,
            auth_service,
        }
    }
}
