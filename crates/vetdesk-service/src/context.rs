//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetdesk_auth::jwt::Claims;
use vetdesk_entity::user::Role;

/// Context for the current authenticated request.
///
/// Attached by the access guard and read by handlers so that every operation
/// knows *who* is acting — e.g. to restrict password changes to the caller's
/// own account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The email carried in the verified claims.
    pub email: String,
    /// The roles carried in the verified claims.
    pub roles: Vec<Role>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Builds a context from verified token claims.
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            roles: claims.roles,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}
