use axum::{routing::post, Router};

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
