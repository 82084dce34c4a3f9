//! User record management — CRUD plus the explicit password-change flow.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use vetdesk_auth::password::PasswordHasher;
use vetdesk_core::error::{AppError, ErrorKind};
use vetdesk_entity::user::{Role, User};
use vetdesk_store::UserStore;

/// Data for creating a user. The password arrives in plaintext and is hashed
/// here, before anything is persisted.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: i64,
    /// Granted roles.
    pub roles: Vec<Role>,
    /// Plaintext password, consumed by hashing.
    pub password: String,
}

/// Profile replacement for an existing user.
///
/// There is no password field here: the stored hash is always preserved, and
/// password changes go through [`UserService::change_password`].
#[derive(Debug, Clone)]
pub struct UpdateUser {
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: i64,
    /// Granted roles.
    pub roles: Vec<Role>,
}

/// Handles user record operations.
#[derive(Clone)]
pub struct UserService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Lists all users.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.find_all().await
    }

    /// Gets a user by id.
    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a user, enforcing email uniqueness and hashing the password.
    pub async fn create(&self, req: CreateUser) -> Result<User, AppError> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let now = Utc::now();

        let user = self
            .users
            .create(User {
                id: Uuid::new_v4(),
                name: req.name,
                lastname: req.lastname,
                email: req.email,
                address: req.address,
                phone: req.phone,
                roles: req.roles,
                password_hash,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// Replaces a user's profile fields. The stored password hash is kept.
    pub async fn update(&self, id: Uuid, req: UpdateUser) -> Result<User, AppError> {
        let existing = self.get(id).await?;

        if req.email != existing.email {
            if let Some(other) = self.users.find_by_email(&req.email).await? {
                if other.id != id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let updated = User {
            id,
            name: req.name,
            lastname: req.lastname,
            email: req.email,
            address: req.address,
            phone: req.phone,
            roles: req.roles,
            password_hash: existing.password_hash,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.users
            .update(id, updated)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes a user's password after verifying the current one.
    pub async fn change_password(
        &self,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let mut user = self.get(id).await?;

        let verified = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !verified {
            return Err(AppError::new(
                ErrorKind::AuthFailed,
                "Current password is incorrect",
            ));
        }

        user.password_hash = self.hasher.hash_password(new_password)?;
        user.updated_at = Utc::now();

        self.users
            .update(id, user)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, "Password changed");

        Ok(())
    }

    /// Deletes a user, returning the removed record.
    pub async fn delete(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
