//! Request handlers for the content API.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete, and for ordered collections a move endpoint) for a single
//! entity type. Handlers validate input, delegate to the corresponding
//! repository in `tourbase_db`, and map errors via [`crate::error::AppError`].

use serde::Deserialize;
use tourbase_core::ordering::Direction;

pub mod auth;
pub mod content_sections;
pub mod faqs;
pub mod gallery;
pub mod hero_slides;
pub mod packages;
pub mod settings;
pub mod testimonials;
pub mod uploads;

/// Request body for `POST /admin/{collection}/{id}/move`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}
