use axum::{routing::get, Router};

use crate::handlers::packages as h;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(h::list).post(h::create))
        .route("/{id}", get(h::get_by_id).put(h::update).delete(h::delete))
}
