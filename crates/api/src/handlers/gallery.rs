//! Handlers for the `/admin/gallery` and `/public/gallery` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{require_non_empty, require_non_empty_if_present};
use tourbase_db::models::gallery_item::{CreateGalleryItem, UpdateGalleryItem};
use tourbase_db::repositories::{GalleryItemRepo, MoveResult};

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::cleanup_upload;
use crate::handlers::MoveRequest;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/gallery
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = GalleryItemRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/public/gallery
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = GalleryItemRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/admin/gallery
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("image_path", &input.image_path)?;

    let item = GalleryItemRepo::create(&state.pool, &input).await?;
    tracing::info!(id = item.id, "Gallery item created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/admin/gallery/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/admin/gallery/{id}
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("image_path", input.image_path.as_deref())?;

    let item = GalleryItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/gallery/{id}
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;

    let deleted = GalleryItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    cleanup_upload(&state.config, &item.image_path).await;
    tracing::info!(id, "Gallery item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/gallery/{id}/move
pub async fn move_record(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    match GalleryItemRepo::move_record(&state.pool, id, input.direction).await? {
        MoveResult::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        })),
        MoveResult::Moved | MoveResult::Unchanged => {
            let items = GalleryItemRepo::list(&state.pool, false).await?;
            Ok(Json(DataResponse { data: items }))
        }
    }
}
