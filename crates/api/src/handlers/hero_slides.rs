//! Handlers for the `/admin/hero-slides` and `/public/hero-slides` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{require_non_empty, require_non_empty_if_present};
use tourbase_db::models::hero_slide::{CreateHeroSlide, UpdateHeroSlide};
use tourbase_db::repositories::{HeroSlideRepo, MoveResult};

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::cleanup_upload;
use crate::handlers::MoveRequest;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/hero-slides
///
/// List all slides in display order, inactive ones included.
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slides = HeroSlideRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// GET /api/v1/public/hero-slides
///
/// Public listing: active slides only, no token required.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slides = HeroSlideRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/admin/hero-slides
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateHeroSlide>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;

    let slide = HeroSlideRepo::create(&state.pool, &input).await?;
    tracing::info!(id = slide.id, title = %slide.title, "Hero slide created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: slide })))
}

/// GET /api/v1/admin/hero-slides/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slide = HeroSlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    Ok(Json(DataResponse { data: slide }))
}

/// PUT /api/v1/admin/hero-slides/{id}
///
/// Partial update: omitted fields are left unchanged.
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSlide>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("title", input.title.as_deref())?;

    let slide = HeroSlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;
    Ok(Json(DataResponse { data: slide }))
}

/// DELETE /api/v1/admin/hero-slides/{id}
///
/// Removes the slide; the backing image file is cleaned up best-effort
/// after the row is gone.
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slide = HeroSlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }))?;

    let deleted = HeroSlideRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        }));
    }

    if let Some(image_path) = &slide.image_path {
        cleanup_upload(&state.config, image_path).await;
    }
    tracing::info!(id, "Hero slide deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/hero-slides/{id}/move
///
/// Swap the slide with its neighbour; boundary moves succeed without
/// changing anything. Returns the resulting full ordering.
pub async fn move_record(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    match HeroSlideRepo::move_record(&state.pool, id, input.direction).await? {
        MoveResult::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "HeroSlide",
            id,
        })),
        MoveResult::Moved | MoveResult::Unchanged => {
            let slides = HeroSlideRepo::list(&state.pool, false).await?;
            Ok(Json(DataResponse { data: slides }))
        }
    }
}
