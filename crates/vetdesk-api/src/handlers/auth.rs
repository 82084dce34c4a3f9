//! Auth handlers — login and me.

use axum::Json;
use axum::extract::State;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: result.user.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(current.user_id).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
