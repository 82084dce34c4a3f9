//! Route definitions for the VetDesk HTTP API.
//!
//! All routes are mounted under `/api`. Each group is wrapped by the guard
//! and/or shape middleware it needs; per the pipeline's control flow, the
//! shape check runs before the access guard, so the shape layer is added
//! after (outside) the guard layer.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use vetdesk_entity::user::Role;

use crate::handlers;
use crate::middleware::{guard, shape};
use crate::state::AppState;
use crate::validate::shapes;

/// User management requires the admin role.
const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// Record writes are for clinic staff.
const CLINIC_STAFF: &[Role] = &[Role::Admin, Role::Vet];
/// Reads and bookings are open to every authenticated role.
const ANY_ROLE: &[Role] = &[Role::Admin, Role::Vet, Role::Owner];

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes(&state))
        .merge(user_routes(&state))
        .merge(pet_routes(&state))
        .merge(appointment_routes(&state))
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Auth endpoints: login (shape-checked, unauthenticated) and me.
fn auth_routes(state: &AppState) -> Router<AppState> {
    let login = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route_layer(from_fn(shape::require_shape(&shapes::LOGIN)));

    let me = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ANY_ROLE),
        ));

    login.merge(me)
}

/// User management endpoints (admin), plus self-service password change.
fn user_routes(state: &AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ADMIN_ONLY),
        ));

    let create = Router::new()
        .route("/users", post(handlers::user::create_user))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ADMIN_ONLY),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::USER_CREATE)));

    let update = Router::new()
        .route("/users/{id}", put(handlers::user::update_user))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ADMIN_ONLY),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::USER_UPDATE)));

    let password = Router::new()
        .route("/users/{id}/password", put(handlers::user::change_password))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ANY_ROLE),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::CHANGE_PASSWORD)));

    reads.merge(create).merge(update).merge(password)
}

/// Pet endpoints: reads for any authenticated role, writes for staff.
fn pet_routes(state: &AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/pets", get(handlers::pet::list_pets))
        .route("/pets/{id}", get(handlers::pet::get_pet))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ANY_ROLE),
        ));

    let create = Router::new()
        .route("/pets", post(handlers::pet::create_pet))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(CLINIC_STAFF),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::PET)));

    let update = Router::new()
        .route("/pets/{id}", put(handlers::pet::update_pet))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(CLINIC_STAFF),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::PET)));

    let remove = Router::new()
        .route("/pets/{id}", delete(handlers::pet::delete_pet))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(CLINIC_STAFF),
        ));

    reads.merge(create).merge(update).merge(remove)
}

/// Appointment endpoints: owners can book, staff manage.
fn appointment_routes(state: &AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/appointments", get(handlers::appointment::list_appointments))
        .route("/appointments/{id}", get(handlers::appointment::get_appointment))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ANY_ROLE),
        ));

    let create = Router::new()
        .route("/appointments", post(handlers::appointment::create_appointment))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(ANY_ROLE),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::APPOINTMENT)));

    let update = Router::new()
        .route("/appointments/{id}", put(handlers::appointment::update_appointment))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(CLINIC_STAFF),
        ))
        .route_layer(from_fn(shape::require_shape(&shapes::APPOINTMENT)));

    let remove = Router::new()
        .route("/appointments/{id}", delete(handlers::appointment::delete_appointment))
        .route_layer(from_fn_with_state(
            state.clone(),
            guard::require_roles(CLINIC_STAFF),
        ));

    reads.merge(create).merge(update).merge(remove)
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
