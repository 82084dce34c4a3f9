//! `CurrentUser` extractor — reads the principal context attached by the
//! access guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vetdesk_core::error::AppError;
use vetdesk_service::context::RequestContext;

use crate::error::ApiError;

/// The authenticated principal context, available in guarded handlers.
///
/// Only routes behind [`crate::middleware::guard::require_roles`] carry the
/// context; extracting it elsewhere rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header").into())
    }
}
