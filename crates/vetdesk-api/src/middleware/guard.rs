//! The access guard: bearer-token authentication plus role authorization.
//!
//! A route group mounts one guard with its required role set:
//!
//! ```ignore
//! .route_layer(middleware::from_fn_with_state(state, guard::require_roles(&[Role::Admin])))
//! ```
//!
//! The guard walks a fixed ladder: no token → `Unauthenticated`; a present
//! token is verified (`TokenExpired` and `TokenInvalid` stay distinct);
//! verified claims must share at least one role with the required set or the
//! request ends `Forbidden`. On success the verified principal is attached
//! to the request as a [`RequestContext`] extension for handlers to read.

use std::future::Future;
use std::pin::Pin;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use vetdesk_auth::jwt::Claims;
use vetdesk_core::error::AppError;
use vetdesk_entity::user::Role;
use vetdesk_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

type MiddlewareFuture = Pin<Box<dyn Future<Output = Result<Response, ApiError>> + Send>>;

/// Builds a guard middleware for the given required role set.
///
/// Authorization is any-of: holding one of `required` is enough.
pub fn require_roles(
    required: &'static [Role],
) -> impl Fn(State<AppState>, Request, Next) -> MiddlewareFuture + Clone + Send + Sync + 'static {
    move |State(state): State<AppState>, mut request: Request, next: Next| {
        Box::pin(async move {
            let claims = bearer_claims(&state, request.headers())?;
            state.rbac.require_any(&claims.roles, required)?;

            request
                .extensions_mut()
                .insert(RequestContext::from_claims(claims));

            Ok(next.run(request).await)
        })
    }
}

/// Extracts and verifies the bearer token from the `Authorization` header.
fn bearer_claims(state: &AppState, headers: &HeaderMap) -> Result<Claims, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

    Ok(state.jwt_decoder.verify(token)?)
}
