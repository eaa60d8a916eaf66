//! Anonymous read-only routes consumed by the marketing site. Every
//! handler here filters to active records; nothing requires a token.

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero-slides", get(handlers::hero_slides::list_public))
        .route("/faqs", get(handlers::faqs::list_public))
        .route("/gallery", get(handlers::gallery::list_public))
        .route(
            "/content-sections",
            get(handlers::content_sections::list_public),
        )
        .route("/packages", get(handlers::packages::list_public))
        .route(
            "/packages/{slug}",
            get(handlers::packages::get_public_by_slug),
        )
        .route("/testimonials", get(handlers::testimonials::list_public))
        .route("/settings", get(handlers::settings::get_public))
}
