//! The login use case — credential lookup, secret verification, token minting.

use std::sync::Arc;

use tracing::{info, warn};

use vetdesk_auth::jwt::{JwtEncoder, SignedToken};
use vetdesk_auth::password::PasswordHasher;
use vetdesk_core::error::AppError;
use vetdesk_entity::user::User;
use vetdesk_store::UserStore;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user. The password hash is skipped on serialization.
    pub user: User,
    /// The freshly minted token.
    pub token: SignedToken,
}

/// Orchestrates the login flow.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the credential record by email
    /// 2. Verify the plaintext password against the stored hash
    /// 3. Mint a token bound to `{id, email, roles}`
    ///
    /// Unknown email and wrong password both fail with `AuthFailed` and the
    /// same message, so the response gives no hint which half was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email, "Login rejected");
            return Err(AppError::auth_failed());
        };

        let verified = self.hasher.verify_password(password, &user.password_hash)?;
        if !verified {
            warn!(email, "Login rejected");
            return Err(AppError::auth_failed());
        }

        let token = self.encoder.issue(user.id, &user.email, &user.roles)?;

        info!(user_id = %user.id, "Login successful");

        Ok(LoginResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use vetdesk_core::config::auth::AuthConfig;
    use vetdesk_core::error::ErrorKind;
    use vetdesk_core::traits::Store;
    use vetdesk_entity::user::Role;
    use vetdesk_store::MemoryUserStore;

    fn test_service() -> (AuthService, Arc<MemoryUserStore>, Arc<PasswordHasher>) {
        let config = AuthConfig {
            jwt_secret: "login-test-secret".to_string(),
            token_ttl_secs: 3600,
        };
        let users = Arc::new(MemoryUserStore::new());
        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(JwtEncoder::new(&config));
        let service = AuthService::new(users.clone(), hasher.clone(), encoder);
        (service, users, hasher)
    }

    async fn seed_user(users: &MemoryUserStore, hasher: &PasswordHasher, email: &str, password: &str) -> User {
        let now = Utc::now();
        users
            .create(User {
                id: Uuid::new_v4(),
                name: "Alice".to_string(),
                lastname: "Smith".to_string(),
                email: email.to_string(),
                address: "123 Main St".to_string(),
                phone: 3001234567,
                roles: vec![Role::Owner],
                password_hash: hasher.hash_password(password).unwrap(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn login_returns_principal_and_token() {
        let (service, users, hasher) = test_service();
        let seeded = seed_user(&users, &hasher, "real@x.com", "plainpassword").await;

        let result = service.login("real@x.com", "plainpassword").await.unwrap();
        assert_eq!(result.user.id, seeded.id);
        assert!(!result.token.token.is_empty());
        assert!(result.token.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let (service, users, hasher) = test_service();
        seed_user(&users, &hasher, "real@x.com", "plainpassword").await;

        let missing = service
            .login("nonexistent@x.com", "anything")
            .await
            .unwrap_err();
        let wrong = service
            .login("real@x.com", "wrongpassword")
            .await
            .unwrap_err();

        assert_eq!(missing.kind, ErrorKind::AuthFailed);
        assert_eq!(wrong.kind, ErrorKind::AuthFailed);
        assert_eq!(missing.message, wrong.message);
    }
}
