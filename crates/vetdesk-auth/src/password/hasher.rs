//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use vetdesk_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// Stateless and safe to call from any number of concurrent requests; the
/// cost parameters are the library defaults, fixed at compile time.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    ///
    /// The plaintext is never stored or logged; only this output is.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// A mismatch is a normal outcome, never an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("hunter22").unwrap();

        assert_ne!(hash, "hunter22");
        assert!(hasher.verify_password("hunter22", &hash).unwrap());
        assert!(!hasher.verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash_password("hunter22").unwrap();
        let second = hasher.hash_password("hunter22").unwrap();
        // Random salt per hash.
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_is_an_error_not_a_mismatch() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify_password("hunter22", "not-a-hash").is_err());
    }
}
