//! Content section entity model and DTOs.
//!
//! Content sections are keyed blocks of page copy (e.g. "about", "why-us")
//! rendered by the marketing site. Slug is immutable after creation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `content_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentSection {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub body: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content section. Omitted `sort_order` appends at the end.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentSection {
    pub slug: String,
    pub title: String,
    pub body: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a content section. Slug cannot be changed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContentSection {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_path: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
