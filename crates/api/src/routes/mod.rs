pub mod auth;
pub mod content_sections;
pub mod faqs;
pub mod gallery;
pub mod health;
pub mod hero_slides;
pub mod packages;
pub mod public;
pub mod settings;
pub mod testimonials;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (admin routes require a Bearer token, public routes
/// do not):
///
/// ```text
/// /auth/login                          login (POST)
///
/// /admin/hero-slides                   list, create
/// /admin/hero-slides/{id}              get, update, delete
/// /admin/hero-slides/{id}/move         reorder (POST)
/// /admin/faqs[...]                     same shape
/// /admin/gallery[...]                  same shape
/// /admin/content-sections[...]         same shape
/// /admin/packages                      list, create
/// /admin/packages/{id}                 get, update, delete
/// /admin/testimonials                  list, create
/// /admin/testimonials/{id}             get, update, delete
/// /admin/settings                      get, update
/// /admin/uploads                       multipart upload (POST)
///
/// /public/hero-slides                  active slides (GET)
/// /public/faqs                         active FAQs (GET)
/// /public/gallery                      active items (GET)
/// /public/content-sections             active sections (GET)
/// /public/packages                     active packages (GET, ?featured=)
/// /public/packages/{slug}              active package by slug (GET)
/// /public/testimonials                 active testimonials (GET)
/// /public/settings                     site settings (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login issues the bearer token).
        .nest("/auth", auth::router())
        // Admin content management.
        .nest("/admin/hero-slides", hero_slides::router())
        .nest("/admin/faqs", faqs::router())
        .nest("/admin/gallery", gallery::router())
        .nest("/admin/content-sections", content_sections::router())
        .nest("/admin/packages", packages::router())
        .nest("/admin/testimonials", testimonials::router())
        .nest("/admin/settings", settings::router())
        .nest("/admin/uploads", uploads::router())
        // Anonymous public reads for the marketing site.
        .nest("/public", public::router())
}
