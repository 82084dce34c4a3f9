//! RBAC enforcement — checks a caller's roles against a route's required set.

use vetdesk_core::error::AppError;
use vetdesk_entity::user::Role;

/// Enforces role-based access control for guarded routes.
///
/// Authorization is any-of: the caller passes when at least one held role
/// appears in the required set. There is no role hierarchy.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether any held role satisfies the required set (returns bool).
    pub fn allows(&self, held: &[Role], required: &[Role]) -> bool {
        held.iter().any(|role| required.contains(role))
    }

    /// Checks whether any held role satisfies the required set.
    ///
    /// Returns `Ok(())` if allowed, or `Err` with kind `Forbidden` if denied.
    pub fn require_any(&self, held: &[Role], required: &[Role]) -> Result<(), AppError> {
        if self.allows(held, required) {
            Ok(())
        } else {
            let names: Vec<&str> = required.iter().map(Role::as_str).collect();
            Err(AppError::forbidden(format!(
                "Requires one of the roles: {}",
                names.join(", ")
            )))
        }
    }
}
