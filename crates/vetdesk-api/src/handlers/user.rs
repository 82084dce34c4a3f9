//! User management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use vetdesk_core::error::AppError;
use vetdesk_service::user::{CreateUser, UpdateUser};

use crate::dto::request::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.user_service.list().await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(id).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .user_service
        .create(CreateUser {
            name: req.name,
            lastname: req.lastname,
            email: req.email,
            address: req.address,
            phone: req.phone,
            roles: req.roles,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update(
            id,
            UpdateUser {
                name: req.name,
                lastname: req.lastname,
                email: req.email,
                address: req.address,
                phone: req.phone,
                roles: req.roles,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/{id}/password
///
/// A caller may only change their own password; admins may change any.
pub async fn change_password(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if current.user_id != id && !current.is_admin() {
        return Err(AppError::forbidden("You can only change your own password").into());
    }

    state
        .user_service
        .change_password(id, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed successfully".to_string(),
    })))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
