use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::villas::dtos::{CreateVillaDto, UpdateVillaDto, VillaResponseDto};
use crate::features::villas::services::VillaService;
use crate::shared::patch::{self, PatchOp};
use crate::shared::types::ApiResponse;

/// List all villas
#[utoipa::path(
    get,
    path = "/api/villas",
    responses(
        (status = 200, description = "List of villas", body = ApiResponse<Vec<VillaResponseDto>>),
    ),
    tag = "villas"
)]
pub async fn list_villas(
    State(service): State<Arc<VillaService>>,
) -> Result<Json<ApiResponse<Vec<VillaResponseDto>>>> {
    let villas = service.list().await?;
    Ok(Json(ApiResponse::success(Some(villas), None, None)))
}

/// Get a villa by id
#[utoipa::path(
    get,
    path = "/api/villas/{id}",
    params(
        ("id" = i64, Path, description = "Villa identifier")
    ),
    responses(
        (status = 200, description = "Villa found", body = ApiResponse<VillaResponseDto>),
        (status = 400, description = "Invalid identifier"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas"
)]
pub async fn get_villa(
    State(service): State<Arc<VillaService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<VillaResponseDto>>> {
    if id <= 0 {
        return Err(AppError::BadRequest(
            "Villa id must be a positive integer".to_string(),
        ));
    }

    let villa = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(villa), None, None)))
}

/// Create a villa
///
/// The response carries a Location header pointing at the created resource.
#[utoipa::path(
    post,
    path = "/api/villas",
    request_body = CreateVillaDto,
    responses(
        (status = 201, description = "Villa created", body = ApiResponse<VillaResponseDto>,
            headers(("Location" = String, description = "URL of the created villa"))),
        (status = 400, description = "Validation error or duplicate name")
    ),
    tag = "villas"
)]
pub async fn create_villa(
    State(service): State<Arc<VillaService>>,
    AppJson(dto): AppJson<CreateVillaDto>,
) -> Result<impl IntoResponse> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let villa = service.create(dto).await?;
    let location = format!("/api/villas/{}", villa.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(villa), None, None)),
    ))
}

/// Fully overwrite a villa
#[utoipa::path(
    put,
    path = "/api/villas/{id}",
    params(
        ("id" = i64, Path, description = "Villa identifier")
    ),
    request_body = UpdateVillaDto,
    responses(
        (status = 204, description = "Villa updated"),
        (status = 400, description = "Identifier mismatch or validation error")
    ),
    tag = "villas"
)]
pub async fn update_villa(
    State(service): State<Arc<VillaService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateVillaDto>,
) -> Result<StatusCode> {
    if id <= 0 || id != dto.id {
        return Err(AppError::BadRequest(
            "Villa id must be positive and match the request body".to_string(),
        ));
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partially update a villa with a list of patch operations
///
/// The current row is mapped to the update shape, the operations are applied
/// to an in-memory copy, and the patched shape is validated before the row
/// is overwritten.
#[utoipa::path(
    patch,
    path = "/api/villas/{id}",
    params(
        ("id" = i64, Path, description = "Villa identifier")
    ),
    request_body = Vec<PatchOp>,
    responses(
        (status = 204, description = "Villa updated"),
        (status = 400, description = "Empty patch, invalid id, unknown row, or validation error")
    ),
    tag = "villas"
)]
pub async fn patch_villa(
    State(service): State<Arc<VillaService>>,
    Path(id): Path<i64>,
    AppJson(ops): AppJson<Vec<PatchOp>>,
) -> Result<StatusCode> {
    if id <= 0 {
        return Err(AppError::BadRequest(
            "Villa id must be a positive integer".to_string(),
        ));
    }
    if ops.is_empty() {
        return Err(AppError::BadRequest(
            "Patch document must contain at least one operation".to_string(),
        ));
    }

    // The id is immutable; reject any operation that targets it, even one
    // writing back the same value.
    if ops.iter().any(|op| matches!(op.field(), Ok("id"))) {
        return Err(AppError::BadRequest(
            "Villa id cannot be changed by a patch".to_string(),
        ));
    }

    let current = service.get_update_shape(id).await?;

    let mut value = serde_json::to_value(&current)
        .map_err(|e| AppError::Internal(format!("Failed to serialize villa: {}", e)))?;
    patch::apply(&mut value, &ops).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let patched: UpdateVillaDto = serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Patched villa is malformed: {}", e)))?;

    patched
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(patched).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a villa by id
#[utoipa::path(
    delete,
    path = "/api/villas/{id}",
    params(
        ("id" = i64, Path, description = "Villa identifier")
    ),
    responses(
        (status = 204, description = "Villa deleted"),
        (status = 400, description = "Invalid identifier"),
        (status = 404, description = "Villa not found")
    ),
    tag = "villas"
)]
pub async fn delete_villa(
    State(service): State<Arc<VillaService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if id <= 0 {
        return Err(AppError::BadRequest(
            "Villa id must be a positive integer".to_string(),
        ));
    }

    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
