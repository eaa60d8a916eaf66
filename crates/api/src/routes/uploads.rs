use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::handlers::uploads as h;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // The per-field size check in the handler enforces the configured
    // limit; the body limit here just caps the whole multipart stream
    // with some headroom for field boundaries.
    Router::new()
        .route("/", post(h::upload))
        .layer(DefaultBodyLimit::max(h::UPLOAD_BODY_LIMIT_BYTES))
}
