//! Hero slide entity model and DTOs.
//!
//! Hero slides form the public landing carousel; they are an ordered
//! collection (sort key ascending, creation time descending on ties).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `hero_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlide {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new hero slide.
///
/// When `sort_order` is omitted the slide is appended at the end of the
/// current order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroSlide {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a hero slide. All fields optional; omission means
/// "leave unchanged".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHeroSlide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
