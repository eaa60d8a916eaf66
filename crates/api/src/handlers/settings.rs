//! Handlers for the site-settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tourbase_core::validation::require_non_empty_if_present;
use tourbase_db::models::site_settings::UpdateSiteSettings;
use tourbase_db::repositories::SiteSettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/settings
pub async fn get(_admin: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// GET /api/v1/public/settings
pub async fn get_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/settings
pub async fn update(
    _admin: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<impl IntoResponse> {
    require_non_empty_if_present("site_name", input.site_name.as_deref())?;

    let settings = SiteSettingsRepo::update(&state.pool, &input).await?;
    tracing::info!("Site settings updated");
    Ok(Json(DataResponse { data: settings }))
}
