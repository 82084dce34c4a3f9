//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// There is deliberately no default for `jwt_secret`: a deployment that does
/// not provide one must fail at startup rather than sign tokens with a
/// well-known literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token TTL in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Rejects configurations that would weaken token signing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set; refusing to start with an empty signing secret",
            ));
        }
        if self.token_ttl_secs == 0 {
            return Err(AppError::configuration("auth.token_ttl_secs must be > 0"));
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    3600
}
