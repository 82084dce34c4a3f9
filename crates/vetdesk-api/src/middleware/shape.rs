//! The request-shape check: validates the JSON body against a declared
//! schema before the handler's typed extractor runs.
//!
//! ```ignore
//! .route_layer(middleware::from_fn(shape::require_shape(&shapes::LOGIN)))
//! ```
//!
//! The body is buffered once, validated, and handed back to the request
//! unchanged, so `Json<T>` in the handler deserializes the exact bytes the
//! schema accepted.

use std::future::Future;
use std::pin::Pin;

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use vetdesk_core::error::AppError;

use crate::error::ApiError;
use crate::validate::Schema;

type MiddlewareFuture = Pin<Box<dyn Future<Output = Result<Response, ApiError>> + Send>>;

/// Request bodies past this size are rejected outright.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds a shape-checking middleware for the given schema.
pub fn require_shape(
    schema: &'static Schema,
) -> impl Fn(Request, Next) -> MiddlewareFuture + Clone + Send + Sync + 'static {
    move |request: Request, next: Next| {
        Box::pin(async move {
            let (parts, body) = request.into_parts();

            let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|_| AppError::validation("Request body too large or unreadable"))?;

            let payload: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|_| AppError::validation("Malformed JSON body"))?;

            schema.validate(&payload).map_err(ApiError::from)?;

            let request = Request::from_parts(parts, Body::from(bytes));
            Ok(next.run(request).await)
        })
    }
}
