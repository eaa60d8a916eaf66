//! Handlers for the `/admin/packages` and `/public/packages` resources.
//!
//! Packages carry structured sub-fields (highlights, itinerary) which are
//! stored as JSONB and travel as structured JSON on the wire; no encoded
//! strings leak past the repository boundary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{require_non_empty, require_non_empty_if_present, validate_slug};
use tourbase_db::models::tour_package::{CreateTourPackage, UpdateTourPackage};
use tourbase_db::repositories::TourPackageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::cleanup_upload;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public package listing (`?featured=true`).
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/admin/packages
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let packages = TourPackageRepo::list(&state.pool, false, false).await?;
    Ok(Json(DataResponse { data: packages }))
}

/// GET /api/v1/public/packages?featured=false
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> AppResult<impl IntoResponse> {
    let packages = TourPackageRepo::list(&state.pool, true, params.featured).await?;
    Ok(Json(DataResponse { data: packages }))
}

/// GET /api/v1/public/packages/{slug}
///
/// Public detail lookup by slug; inactive packages are invisible here.
pub async fn get_public_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let package = TourPackageRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No active package with slug '{slug}'")))?;
    Ok(Json(DataResponse { data: package }))
}

/// POST /api/v1/admin/packages
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTourPackage>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;
    validate_slug(&input.slug)?;

    let package = TourPackageRepo::create(&state.pool, &input).await?;
    tracing::info!(id = package.id, slug = %package.slug, "Tour package created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: package })))
}

/// GET /api/v1/admin/packages/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let package = TourPackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TourPackage",
            id,
        }))?;
    Ok(Json(DataResponse { data: package }))
}

/// PUT /api/v1/admin/packages/{id}
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTourPackage>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("title", input.title.as_deref())?;

    let package = TourPackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TourPackage",
            id,
        }))?;
    Ok(Json(DataResponse { data: package }))
}

/// DELETE /api/v1/admin/packages/{id}
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let package = TourPackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TourPackage",
            id,
        }))?;

    let deleted = TourPackageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TourPackage",
            id,
        }));
    }

    if let Some(image_path) = &package.image_path {
        cleanup_upload(&state.config, image_path).await;
    }
    tracing::info!(id, "Tour package deleted");
    Ok(StatusCode::NO_CONTENT)
}
