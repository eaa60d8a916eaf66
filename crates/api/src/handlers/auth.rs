//! Admin login: verifies credentials and issues the JWT used by every
//! protected endpoint. There is no refresh token and no server-side
//! session; the signed token is the whole session.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tourbase_core::error::CoreError;
use tourbase_db::repositories::AdminUserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Wrong email and wrong password produce the same 401 so the endpoint
/// does not leak which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = AdminUserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(invalid());
    }

    let token = generate_token(&user.email, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %user.email, "Admin logged in");
    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            expires_in: state.config.jwt.expiry_hours * 3600,
            user: LoginUser {
                email: user.email,
                role: user.role,
            },
        },
    }))
}
