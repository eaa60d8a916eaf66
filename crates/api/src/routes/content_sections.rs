use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::content_sections as h;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(h::list).post(h::create))
        .route("/{id}", get(h::get_by_id).put(h::update).delete(h::delete))
        .route("/{id}/move", post(h::move_record))
}
