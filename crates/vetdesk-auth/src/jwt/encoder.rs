//! JWT token creation with configurable signing secret and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use vetdesk_core::config::auth::AuthConfig;
use vetdesk_core::error::AppError;
use vetdesk_entity::user::Role;

use super::claims::Claims;

/// Creates signed JWT access tokens.
///
/// The signing secret is injected at construction and read-only afterwards,
/// so a single encoder is safe to share across concurrent requests.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in seconds.
    ttl_secs: i64,
}

/// A freshly issued token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignedToken {
    /// The encoded, signed token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.token_ttl_secs as i64,
        }
    }

    /// Issues a token bound to the given principal.
    pub fn issue(&self, user_id: Uuid, email: &str, roles: &[Role]) -> Result<SignedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(SignedToken { token, expires_at })
    }
}
