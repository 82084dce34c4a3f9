//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vetdesk_auth::jwt::JwtDecoder;
use vetdesk_auth::rbac::RbacEnforcer;
use vetdesk_core::config::AppConfig;
use vetdesk_service::appointment::AppointmentService;
use vetdesk_service::auth::AuthService;
use vetdesk_service::pet::PetService;
use vetdesk_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; everything here is
/// read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer.
    pub rbac: Arc<RbacEnforcer>,
    /// Login orchestration.
    pub auth_service: Arc<AuthService>,
    /// User record service.
    pub user_service: Arc<UserService>,
    /// Pet record service.
    pub pet_service: Arc<PetService>,
    /// Appointment record service.
    pub appointment_service: Arc<AppointmentService>,
}
