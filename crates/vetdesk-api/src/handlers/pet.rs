//! Pet record handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use vetdesk_entity::pet::Pet;
use vetdesk_service::pet::PetInput;

use crate::dto::request::PetRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

impl From<PetRequest> for PetInput {
    fn from(req: PetRequest) -> Self {
        Self {
            name: req.name,
            species: req.species,
            breed: req.breed,
            size: req.size,
            age: req.age,
            owner_id: req.owner_id,
        }
    }
}

/// GET /api/pets
pub async fn list_pets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Pet>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.pet_service.list().await?)))
}

/// GET /api/pets/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Pet>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.pet_service.get(id).await?)))
}

/// POST /api/pets
pub async fn create_pet(
    State(state): State<AppState>,
    Json(req): Json<PetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Pet>>), ApiError> {
    let pet = state.pet_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pet))))
}

/// PUT /api/pets/{id}
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PetRequest>,
) -> Result<Json<ApiResponse<Pet>>, ApiError> {
    Ok(Json(ApiResponse::ok(
        state.pet_service.update(id, req.into()).await?,
    )))
}

/// DELETE /api/pets/{id}
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Pet>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.pet_service.delete(id).await?)))
}
