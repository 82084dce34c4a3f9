//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use vetdesk_core::config::auth::AuthConfig;
use vetdesk_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens against the process-wide signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: expiry is exact.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning the embedded claims.
    ///
    /// Expiry and malformed/forged encodings fail with distinct error kinds
    /// so the HTTP layer can answer with distinguishable messages.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::token_invalid("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::token_invalid("Invalid token format")
                    }
                    _ => AppError::token_invalid(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;
    use vetdesk_core::error::ErrorKind;
    use vetdesk_entity::user::Role;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_secs: 3600,
        }
    }

    #[test]
    fn issued_token_verifies_within_ttl() {
        let config = test_config("unit-test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let signed = encoder
            .issue(user_id, "vet@clinic.test", &[Role::Vet])
            .unwrap();

        let claims = decoder.verify(&signed.token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "vet@clinic.test");
        assert_eq!(claims.roles, vec![Role::Vet]);
        assert_eq!(claims.exp, signed.expires_at.timestamp());
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let config = test_config("unit-test-secret");
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "old@clinic.test".to_string(),
            roles: vec![Role::Owner],
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenExpired);
    }

    #[test]
    fn tampered_token_is_rejected_as_invalid() {
        let config = test_config("unit-test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let signed = encoder
            .issue(Uuid::new_v4(), "vet@clinic.test", &[Role::Vet])
            .unwrap();

        // Flip one character in the middle of the signature segment.
        let parts: Vec<&str> = signed.token.split('.').collect();
        let mut signature: Vec<char> = parts[2].chars().collect();
        let mid = signature.len() / 2;
        signature[mid] = if signature[mid] == 'A' { 'B' } else { 'A' };
        let tampered = format!(
            "{}.{}.{}",
            parts[0],
            parts[1],
            signature.into_iter().collect::<String>()
        );

        let err = decoder.verify(&tampered).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let encoder = JwtEncoder::new(&test_config("secret-a"));
        let decoder = JwtDecoder::new(&test_config("secret-b"));

        let signed = encoder
            .issue(Uuid::new_v4(), "vet@clinic.test", &[Role::Vet])
            .unwrap();

        let err = decoder.verify(&signed.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }

    #[test]
    fn garbage_token_is_rejected_as_invalid() {
        let decoder = JwtDecoder::new(&test_config("unit-test-secret"));
        let err = decoder.verify("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }
}
