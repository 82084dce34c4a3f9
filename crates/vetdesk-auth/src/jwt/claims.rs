//! JWT claims structure carried inside every issued token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetdesk_entity::user::Role;

/// JWT claims payload embedded in every access token.
///
/// A token carries no mutable state: once signed it is only ever reissued,
/// never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Email at the time of issuance.
    pub email: String,
    /// Roles at the time of issuance.
    pub roles: Vec<Role>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
