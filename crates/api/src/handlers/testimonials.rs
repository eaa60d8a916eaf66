//! Handlers for the `/admin/testimonials` and `/public/testimonials`
//! resources. Testimonials are unordered; public listing is newest first.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::error::CoreError;
use tourbase_core::types::DbId;
use tourbase_core::validation::{
    require_non_empty, require_non_empty_if_present, validate_rating,
};
use tourbase_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use tourbase_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/testimonials
pub async fn list(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// GET /api/v1/public/testimonials
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("author_name", &input.author_name)?;
    require_non_empty("quote", &input.quote)?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(id = testimonial.id, "Testimonial created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// GET /api/v1/admin/testimonials/{id}
pub async fn get_by_id(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("author_name", input.author_name.as_deref())?;
    require_non_empty_if_present("quote", input.quote.as_deref())?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    _admin: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }
    tracing::info!(id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
