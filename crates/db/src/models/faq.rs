//! FAQ entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tourbase_core::types::{DbId, Timestamp};

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new FAQ. Omitted `sort_order` appends at the end.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating an FAQ. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
