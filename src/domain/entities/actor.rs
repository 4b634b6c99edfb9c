//! The authenticated caller of an operation.

use uuid::Uuid;

/// Identity resolved from a request's credentials.
///
/// Produced by [`crate::application::services::AuthService::authenticate`]
/// and passed explicitly into every bid operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl Actor {
    pub fn new(user_id: Uuid, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// A regular, non-privileged identity.
    pub fn user(user_id: Uuid) -> Self {
        Self::new(user_id, false)
    }

    /// An administrative identity.
    pub fn admin(user_id: Uuid) -> Self {
        Self::new(user_id, true)
    }
}
