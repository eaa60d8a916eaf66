use axum::{routing::get, Router};

use crate::handlers::settings as h;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(h::get).put(h::update))
}
