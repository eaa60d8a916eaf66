//! Handlers for the `/admin/faqs` and `/public/faqs` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{require_non_empty, require_non_empty_if_present};
use tourbase_db::models::faq::{CreateFaq, UpdateFaq};
use tourbase_db::repositories::{FaqRepo, MoveResult};

use crate::error::{AppError, AppResult};
use crate::handlers::MoveRequest;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/faqs
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let faqs = FaqRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// GET /api/v1/public/faqs
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let faqs = FaqRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// POST /api/v1/admin/faqs
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("question", &input.question)?;
    require_non_empty("answer", &input.answer)?;

    let faq = FaqRepo::create(&state.pool, &input).await?;
    tracing::info!(id = faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// GET /api/v1/admin/faqs/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(DataResponse { data: faq }))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("question", input.question.as_deref())?;
    require_non_empty_if_present("answer", input.answer.as_deref())?;

    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }));
    }
    tracing::info!(id, "FAQ deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/faqs/{id}/move
pub async fn move_record(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    match FaqRepo::move_record(&state.pool, id, input.direction).await? {
        MoveResult::NotFound => Err(AppError::Core(CoreError::NotFound { entity: "Faq", id })),
        MoveResult::Moved | MoveResult::Unchanged => {
            let faqs = FaqRepo::list(&state.pool, false).await?;
            Ok(Json(DataResponse { data: faqs }))
        }
    }
}
