//! Gallery item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: Option<String>,
    pub image_path: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery item. Omitted `sort_order` appends at the end.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: Option<String>,
    pub image_path: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a gallery item. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
