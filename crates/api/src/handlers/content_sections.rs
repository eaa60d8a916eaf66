//! Handlers for the `/admin/content-sections` and `/public/content-sections`
//! resources. Sections are keyed page blocks; the slug is immutable.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{require_non_empty, require_non_empty_if_present, validate_slug};
use tourbase_db::models::content_section::{CreateContentSection, UpdateContentSection};
use tourbase_db::repositories::{ContentSectionRepo, MoveResult};

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::cleanup_upload;
use crate::handlers::MoveRequest;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/content-sections
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = ContentSectionRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// GET /api/v1/public/content-sections
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = ContentSectionRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/content-sections
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateContentSection>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    require_non_empty("title", &input.title)?;

    let section = ContentSectionRepo::create(&state.pool, &input).await?;
    tracing::info!(id = section.id, slug = %section.slug, "Content section created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// GET /api/v1/admin/content-sections/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = ContentSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentSection",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/admin/content-sections/{id}
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContentSection>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("title", input.title.as_deref())?;

    let section = ContentSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentSection",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/admin/content-sections/{id}
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = ContentSectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentSection",
            id,
        }))?;

    let deleted = ContentSectionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContentSection",
            id,
        }));
    }

    if let Some(image_path) = &section.image_path {
        cleanup_upload(&state.config, image_path).await;
    }
    tracing::info!(id, "Content section deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/content-sections/{id}/move
pub async fn move_record(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    match ContentSectionRepo::move_record(&state.pool, id, input.direction).await? {
        MoveResult::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "ContentSection",
            id,
        })),
        MoveResult::Moved | MoveResult::Unchanged => {
            let sections = ContentSectionRepo::list(&state.pool, false).await?;
            Ok(Json(DataResponse { data: sections }))
        }
    }
}
